//! Built-in challenge bodies.
//!
//! Each body is a stand-in for a submitted `solution`. `placeholder` models
//! generated scaffolding that never compiled into a callable `solution`.

mod binary_search;
mod longest_substring;
mod max_subarray;
mod palindrome;
mod placeholder;
mod reverse_string;
mod two_sum;

use harness::Challenge;

/// Names accepted by [`lookup`], sorted.
pub const NAMES: &[&str] = &[
    "binary-search",
    "longest-unique-substring",
    "max-subarray",
    "placeholder",
    "reverse-string",
    "two-sum",
    "valid-palindrome",
];

/// Resolve a challenge body by name.
pub fn lookup(name: &str) -> Option<Box<dyn Challenge>> {
    let challenge: Box<dyn Challenge> = match name {
        "binary-search" => Box::new(binary_search::BinarySearch),
        "longest-unique-substring" => Box::new(longest_substring::LongestUniqueSubstring),
        "max-subarray" => Box::new(max_subarray::MaxSubarray),
        "placeholder" => Box::new(placeholder::Placeholder),
        "reverse-string" => Box::new(reverse_string::ReverseString),
        "two-sum" => Box::new(two_sum::TwoSum),
        "valid-palindrome" => Box::new(palindrome::ValidPalindrome),
        _ => return None,
    };
    Some(challenge)
}
