//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parse;
use syn::{DeriveInput, Lit, LitInt, LitStr, parse_macro_input};

/// Derive `Solver` for a type that implements `PartSolver<1>` through
/// `PartSolver<max_parts>`.
///
/// Generates `PARTS = max_parts` and a `solve_part` that matches the runtime
/// part number to the matching `PartSolver` impl. Any other part returns
/// `SolveError::PartNotImplemented`.
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AocSolver derive requires #[aoc_solver(max_parts = N)]",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unknown aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "max_parts must be at least 1")),
        Some(n) => n,
        None => return Err(syn::Error::new_spanned(attr, "missing `max_parts`")),
    };

    let arms = (1..=max_parts).map(|part| {
        let n = LitInt::new(&part.to_string(), Span::call_site());
        quote! {
            #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g. 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. String literals used for filtering (e.g. `["grid"]`)
/// - `expect`: Optional. Recorded answers for the full input, part 1 first.
///   Integers and strings are accepted; `""` marks an unknown answer.
/// - `example`: Optional. Recorded answers for the example input.
///
/// The type must implement `Solver`; otherwise the generated bound check
/// fails with `the trait bound `YourSolver: Solver` is not satisfied`.
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 1, tags = ["lists"], expect = [2344935, 27647262], example = [11, 31])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive requires #[aoc(year = .., day = ..)]",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();
    let mut expect: Vec<LitStr> = Vec::new();
    let mut example: Vec<LitStr> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be within 1..=25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("tags") {
            meta.value()?;
            tags = parse_literal_list(meta.input)?;
        } else if meta.path.is_ident("expect") {
            meta.value()?;
            expect = parse_literal_list(meta.input)?;
        } else if meta.path.is_ident("example") {
            meta.value()?;
            example = parse_literal_list(meta.input)?;
        } else {
            return Err(meta.error(
                "unknown aoc attribute, expected `year`, `day`, `tags`, `expect` or `example`",
            ));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
                expected: ::aoc_solver::Expectations {
                    full: &[#(#expect),*],
                    example: &[#(#example),*],
                },
            }
        }
    })
}

/// Parse `["a", 12, "b"]`, turning integer literals into their decimal text
fn parse_literal_list(input: syn::parse::ParseStream<'_>) -> syn::Result<Vec<LitStr>> {
    let content;
    syn::bracketed!(content in input);
    let items = content.parse_terminated(Lit::parse, syn::Token![,])?;
    items
        .into_iter()
        .map(|lit| match lit {
            Lit::Str(s) => Ok(s),
            Lit::Int(i) => Ok(LitStr::new(i.base10_digits(), i.span())),
            other => Err(syn::Error::new_spanned(other, "expected a string or integer literal")),
        })
        .collect()
}
