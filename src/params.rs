/*!
# Argtree: Parameters
*/

use std::{
	collections::BTreeMap,
	fmt,
	ops::Index,
};



/// # Flag True.
pub(crate) const TRUE: &str = "true";

/// # Flag False.
pub(crate) const FALSE: &str = "false";



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parameter Mapping.
///
/// This holds the name/value pairs collected during a parse, and is what gets
/// passed to bound actions. All values are strings; flags are recorded as
/// `"true"` or `"false"`.
///
/// Lookups for names that were never set — say, a flag declared on some other
/// branch of the tree — are perfectly fine. [`Params::get`] returns `None`,
/// [`Params::flag`] returns `false`, and indexing returns an empty string.
///
/// ## Examples
///
/// ```
/// use argtree::{Arg, CommandTree};
///
/// let tree = CommandTree::new()
///     .with_arg(Arg::mandatory("name")).unwrap()
///     .with_arg(Arg::flag("quiet").with_short('q')).unwrap();
///
/// let mut tokens = argtree::tokenize(["--name=foo"]);
/// let params = tree.parse_tokens(&mut tokens).unwrap();
///
/// assert_eq!(params.get("name"), Some("foo"));
/// assert!(! params.flag("quiet"));
/// assert_eq!(&params["nope"], "");
/// ```
pub struct Params(BTreeMap<&'static str, String>);

impl fmt::Display for Params {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (k, v) in &self.0 {
			if first { first = false; }
			else { f.write_str(", ")?; }
			write!(f, "{k}={v}")?;
		}
		Ok(())
	}
}

impl Index<&str> for Params {
	type Output = str;

	#[inline]
	fn index(&self, name: &str) -> &Self::Output { self.get(name).unwrap_or("") }
}

impl Params {
	#[must_use]
	#[inline]
	/// # Get.
	///
	/// Return the value associated with `name`, if any.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	#[must_use]
	#[inline]
	/// # Flag.
	///
	/// Return `true` if `name` was recorded as `"true"`.
	pub fn flag(&self, name: &str) -> bool { self.get(name) == Some(TRUE) }

	#[must_use]
	#[inline]
	/// # Contains?
	pub fn contains(&self, name: &str) -> bool { self.0.contains_key(name) }

	#[must_use]
	#[inline]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterator.
	///
	/// Iterate over the name/value pairs, ordered by name.
	pub fn iter(&self) -> impl Iterator<Item=(&'static str, &str)> {
		self.0.iter().map(|(k, v)| (*k, v.as_str()))
	}
}

impl Params {
	/// # Insert.
	///
	/// Sibling names are unique, so collisions can only come from different
	/// levels of the tree; the later write wins.
	pub(crate) fn insert(&mut self, name: &'static str, value: String) {
		self.0.insert(name, value);
	}
}
