use std::collections::HashMap;
use std::io::{self, Read};

use super::prefix::Prefix;

/// Default prefix window length used by [`SuffixModel::default`].
pub const DEFAULT_PREFIX_LEN: usize = 2;

/// Word-level suffix model.
///
/// The `SuffixModel` maps each observed prefix (a window of `prefix_len`
/// consecutive words, keyed by its canonical string form) to the list of
/// words seen to follow it. Duplicates are retained, so a word that
/// followed a prefix more often weighs proportionally more in the
/// uniform draw performed during generation.
///
/// # Responsibilities
/// - Tokenize input streams on whitespace and accumulate observations
/// - Layer multiple documents onto the same table without cross-document
///   associations
/// - Serve successor lookups and read-only introspection during generation
///
/// # Invariants
/// - `prefix_len` is always >= 1
/// - Every successor list in `table` is non-empty
/// - The table only grows; entries are never removed or merged away
#[derive(Clone, Debug)]
pub struct SuffixModel {
	/// Length of the sliding prefix window.
	prefix_len: usize,

	/// Mapping from a canonical prefix key to its observed successors.
	table: HashMap<String, Vec<String>>,
}

impl SuffixModel {
	/// Creates a new model with the given prefix window length.
	///
	/// # Errors
	/// Returns an error if `prefix_len < 1`. A zero-length window would
	/// collapse every lookup into a single global bucket.
	pub fn new(prefix_len: usize) -> Result<Self, String> {
		if prefix_len < 1 {
			return Err("prefix length must be >= 1".to_owned());
		}
		Ok(Self { prefix_len, table: HashMap::new() })
	}

	/// Returns a model with the default prefix window length of 2.
	pub fn default() -> Self {
		Self { prefix_len: DEFAULT_PREFIX_LEN, table: HashMap::new() }
	}

	/// Returns the prefix window length.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Reads `input` to end-of-stream and feeds every word into the table.
	///
	/// Tokenization splits on whitespace only. Any contiguous run of
	/// non-whitespace characters is one word: no punctuation handling,
	/// no case folding.
	///
	/// The sliding prefix starts from empty-string slots on every call,
	/// so observations from separate documents never produce a key mixing
	/// the tail of one document with the head of the next. Repeated calls
	/// layer onto the existing table.
	///
	/// A stream that yields no words leaves the table unchanged.
	///
	/// # Errors
	/// Propagates the underlying read failure (including invalid UTF-8 in
	/// the stream). The whole stream is drained before any insertion, so
	/// a failed call leaves the table untouched.
	pub fn feed<R: Read>(&mut self, mut input: R) -> io::Result<()> {
		let mut text = String::new();
		input.read_to_string(&mut text)?;

		let mut prefix = Prefix::new(self.prefix_len);
		for word in text.split_whitespace() {
			self.table.entry(prefix.key()).or_default().push(word.to_owned());
			prefix.shift(word);
		}

		Ok(())
	}

	/// Returns the successors observed for a canonical prefix key.
	///
	/// Returns `None` for an unknown key. A returned slice is never empty.
	pub fn successors(&self, key: &str) -> Option<&[String]> {
		self.table.get(key).map(Vec::as_slice)
	}

	/// Returns the number of distinct prefixes in the table.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	/// Returns `true` if no text has ever been fed.
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Iterates over all table entries in unspecified order.
	///
	/// Introspection hook for diagnostic listings; generation does not
	/// depend on it.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.table.iter().map(|(key, successors)| (key.as_str(), successors.as_slice()))
	}
}
