use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::Result;

mod branch;

use self::branch::Likeliness;

fn try_expand<F>(func: F) -> TokenStream2
where
	F: FnOnce() -> Result<TokenStream2>
{
	func().unwrap_or_else(|err| err.to_compile_error())
}

/// An `if` whose condition is expected to be `true`.
///
/// `likely_if!(cond { .. } else ..)` expands to
/// `if ::branch_hint::opt::hint::likely(cond) { .. } else ..`. The `else` tail may be a
/// block, a plain `if`, or another `likely_if`/`unlikely_if` written without
/// the `!`.
#[proc_macro]
pub fn likely_if(item: TokenStream) -> TokenStream {
	try_expand(|| branch::hinted_if(Likeliness::Likely, item.into())).into()
}

/// An `if` whose condition is expected to be `false`.
///
/// See [`likely_if!`] for the accepted syntax.
#[proc_macro]
pub fn unlikely_if(item: TokenStream) -> TokenStream {
	try_expand(|| branch::hinted_if(Likeliness::Unlikely, item.into())).into()
}
