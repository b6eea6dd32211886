//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering puzzles with the plugin system
///
/// This macro generates the necessary code to register a puzzle with the
/// inventory system, allowing it to be discovered and registered
/// automatically.
///
/// # Attributes
///
/// - `event`: Required. The event family (e.g. "adventofcode")
/// - `year`: Required. The puzzle year (e.g. 2023)
/// - `day`: Required. The day number
/// - `tags`: Optional. Array of string literals for filtering (e.g. ["easy", "math"])
///
/// # Requirements
///
/// The type must implement the `Puzzle` trait. If the trait is not
/// implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourPuzzle: Puzzle` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use puzzle_solver::{ParseError, Puzzle, PuzzleParser, SolveError};
/// use puzzle_solver_macros::AutoRegisterPuzzle;
///
/// #[derive(AutoRegisterPuzzle)]
/// #[puzzle(event = "adventofcode", year = 2023, day = 6, tags = ["easy", "math"])]
/// struct Day6;
///
/// impl Puzzle for Day6 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterPuzzle, attributes(puzzle))]
pub fn derive_auto_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Extract the struct name
    let name = &input.ident;

    // Find the #[puzzle(...)] attribute
    let puzzle_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterPuzzle derive macro requires #[puzzle(...)] attribute");

    // Parse the attribute arguments
    let mut event: Option<String> = None;
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    // Parse nested meta items
    puzzle_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("event") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Str(lit_str) = value {
                    event = Some(lit_str.value());
                }
            } else if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    // Skip comma if present
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[puzzle(...)] attribute");

    let event = event.expect("Missing required 'event' attribute");
    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    // Generate the tags array
    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    // Generate the code with a compile-time trait bound check
    let expanded = quote! {
        // Compile-time check that the type implements the Puzzle trait.
        // This generates a helpful error message if the trait is missing.
        const _: () = {
            trait MustImplementPuzzle: ::puzzle_solver::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::PuzzlePlugin {
                event: #event,
                year: #year,
                day: #day,
                puzzle: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
