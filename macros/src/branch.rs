use proc_macro2::TokenStream;
use quote::{quote, quote_spanned, ToTokens};
use syn::parse::{ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{token, Block, Error, Expr, Ident, Result, Token};

const LET_CONDITION: &str = "expected a boolean condition, `let` patterns cannot be hinted";
const ELSE_TAIL: &str = "expected `{`, `if`, `likely_if` or `unlikely_if` after `else`";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Likeliness {
	Likely,
	Unlikely,
	Unhinted
}

impl Likeliness {
	fn from_keyword(ident: &Ident) -> Option<Self> {
		match ident.to_string().as_str() {
			"likely_if" => Some(Self::Likely),
			"unlikely_if" => Some(Self::Unlikely),
			_ => None
		}
	}

	fn wrap(self, cond: &Expr) -> TokenStream {
		let span = cond.span();

		match self {
			Self::Likely => quote_spanned! { span =>
				::branch_hint::opt::hint::likely(#cond)
			},

			Self::Unlikely => quote_spanned! { span =>
				::branch_hint::opt::hint::unlikely(#cond)
			},

			Self::Unhinted => cond.to_token_stream()
		}
	}
}

enum Tail {
	Block(Block),
	If(Box<HintedIf>)
}

struct HintedIf {
	hint: Likeliness,
	cond: Expr,
	then_branch: Block,
	else_branch: Option<(Token![else], Tail)>
}

impl HintedIf {
	fn parse_with(input: ParseStream<'_>, hint: Likeliness) -> Result<Self> {
		let hinted = hint != Likeliness::Unhinted;

		if hinted && input.peek(Token![let]) {
			return Err(input.error(LET_CONDITION));
		}

		/* a plain `else if` keeps full `if` syntax, `let` included */
		let cond = Expr::parse_without_eager_brace(input)?;

		match &cond {
			Expr::Let(expr) if hinted => return Err(Error::new_spanned(expr, LET_CONDITION)),
			_ => ()
		}

		let then_branch = input.parse::<Block>()?;
		let else_branch = match input.parse::<Option<Token![else]>>()? {
			Some(else_token) => Some((else_token, Self::parse_tail(input)?)),
			None => None
		};

		Ok(Self { hint, cond, then_branch, else_branch })
	}

	fn parse_tail(input: ParseStream<'_>) -> Result<Tail> {
		if input.peek(token::Brace) {
			return input.parse().map(Tail::Block);
		}

		if input.peek(Token![if]) {
			input.parse::<Token![if]>()?;

			return Self::parse_with(input, Likeliness::Unhinted)
				.map(|tail| Tail::If(Box::new(tail)));
		}

		let ident = input
			.parse::<Ident>()
			.map_err(|err| Error::new(err.span(), ELSE_TAIL))?;

		let hint = Likeliness::from_keyword(&ident)
			.ok_or_else(|| Error::new_spanned(&ident, ELSE_TAIL))?;

		Self::parse_with(input, hint).map(|tail| Tail::If(Box::new(tail)))
	}

	fn expand(&self) -> TokenStream {
		let cond = self.hint.wrap(&self.cond);
		let then_branch = &self.then_branch;

		let else_branch = match &self.else_branch {
			Some((else_token, Tail::Block(block))) => quote! { #else_token #block },
			Some((else_token, Tail::If(tail))) => {
				let tail = tail.expand();

				quote! { #else_token #tail }
			}

			None => quote! {}
		};

		quote! { if #cond #then_branch #else_branch }
	}
}

pub fn hinted_if(hint: Likeliness, item: TokenStream) -> Result<TokenStream> {
	let parser = |input: ParseStream<'_>| HintedIf::parse_with(input, hint);
	let hinted = parser.parse2(item)?;

	Ok(hinted.expand())
}
