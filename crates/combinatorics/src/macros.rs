/// Variadic form of [`crate::pr_count`], for example `pr_count![2, 3] == 10`.
#[macro_export]
macro_rules! pr_count {
    () => {
        $crate::pr_count(&[])
    };
    ($($m:expr),+ $(,)?) => {
        $crate::pr_count(&[$($m),+])
    };
}
