/*!
# Argtree: Tokens
*/

use std::{
	ffi::OsString,
	ops::Deref,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Token Buffer.
///
/// This is the flat, ordered list of argument strings a parse works through.
/// Any raw argument containing an `=` is split at the first one into two
/// tokens, so `--key=val` and `--key val` are indistinguishable once here.
/// Nothing else is normalized; there is no trimming or case-folding.
///
/// Matching consumes tokens as it goes, so whatever remains after a parse are
/// the arguments nobody claimed.
///
/// ## Examples
///
/// ```
/// let tokens = argtree::tokenize(["--name=foo", "build", "-h"]);
/// assert_eq!(tokens.as_slice(), ["--name", "foo", "build", "-h"]);
/// ```
pub struct Tokens(Vec<String>);

impl Deref for Tokens {
	type Target = [String];

	#[inline]
	fn deref(&self) -> &Self::Target { self.0.as_slice() }
}

impl<S: Into<String>> FromIterator<S> for Tokens {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		let mut out = Vec::new();
		for raw in src {
			let mut raw: String = raw.into();
			if let Some(idx) = raw.find('=') {
				let value = raw.split_off(idx + 1);
				raw.truncate(idx);
				out.push(raw);
				out.push(value);
			}
			else { out.push(raw); }
		}
		Self(out)
	}
}

impl From<Tokens> for Vec<String> {
	#[inline]
	fn from(src: Tokens) -> Self { src.0 }
}

impl Tokens {
	#[must_use]
	#[inline]
	/// # As Slice.
	pub fn as_slice(&self) -> &[String] { self.0.as_slice() }

	#[must_use]
	#[inline]
	/// # Into Inner.
	///
	/// Return the remaining tokens as an owned vector.
	pub fn into_inner(self) -> Vec<String> { self.0 }

	#[must_use]
	/// # Peek.
	///
	/// Return the first remaining token, if any.
	pub fn peek(&self) -> Option<&str> { self.0.first().map(String::as_str) }
}

impl Tokens {
	/// # Find Marker.
	///
	/// Return the index of the first token equal to `--{long}`, or failing
	/// that, `-{short}`.
	pub(crate) fn find_marker(&self, long: &str, short: Option<char>) -> Option<usize> {
		self.0.iter()
			.position(|t| t.strip_prefix("--").is_some_and(|t| t == long))
			.or_else(|| {
				let short = short?;
				self.0.iter().position(|t| is_short(t, short))
			})
	}

	/// # Remove One.
	pub(crate) fn remove(&mut self, idx: usize) -> String { self.0.remove(idx) }

	/// # Remove Pair.
	///
	/// Remove the marker at `idx` along with the value after it, returning
	/// the value. Nothing is removed if there is no value.
	pub(crate) fn remove_pair(&mut self, idx: usize) -> Option<String> {
		if idx + 1 < self.0.len() {
			let value = self.0.remove(idx + 1);
			self.0.remove(idx);
			Some(value)
		}
		else { None }
	}
}



#[must_use]
/// # Tokenize.
///
/// Split raw arguments (excluding the program path) into a [`Tokens`] buffer.
pub fn tokenize<I, S>(raw: I) -> Tokens
where I: IntoIterator<Item=S>, S: Into<String> {
	raw.into_iter().collect()
}

#[must_use]
/// # Environment Tokens.
///
/// Tokenize [`std::env::args_os`], skipping the first (program path) entry.
///
/// Arguments that aren't valid UTF-8 are converted lossily rather than
/// causing a panic.
pub fn args() -> Tokens {
	std::env::args_os()
		.skip(1)
		.map(|a: OsString| a.into_string().unwrap_or_else(|a| a.to_string_lossy().into_owned()))
		.collect()
}



/// # Is Short Marker?
///
/// Match `-c` without allocating.
fn is_short(token: &str, short: char) -> bool {
	let mut chars = token.chars();
	chars.next() == Some('-') &&
	chars.next() == Some(short) &&
	chars.next().is_none()
}
