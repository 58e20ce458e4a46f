//!
//! This crate defines the procedural macros used by the tests of the Tally
//! workspace.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

use quote::quote;
use syn::ItemFn;
use syn::parse_macro_input;

/// A macro that makes the function marked as a `#[test]` function and also initializes the test_logger().
///
/// The crate using this attribute must depend on `tally_utilities`.
#[proc_macro_attribute]
pub fn tally_test(_attr: proc_macro::TokenStream, item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let block = &input.block;
    let attrs = &input.attrs;
    let sig = &input.sig;

    let output = quote! {
        #[test]
        #(#attrs)*
        #sig {
            let __logger = tally_utilities::test_logger();
            #block
        }
    };

    output.into()
}
