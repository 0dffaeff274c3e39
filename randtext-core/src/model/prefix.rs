/// Sliding window over the most recently seen words.
///
/// A `Prefix` holds a fixed number of words and is advanced one word at a
/// time while a document is read or a sequence is generated. Its canonical
/// string form is the lookup key into the suffix table.
///
/// A fresh window is filled with empty-string slots, so the very first
/// words of a document are reachable from the all-empty starting key.
///
/// ## Responsibilities
/// - Track the last `len` words in order of appearance
/// - Derive the canonical key (words joined by a single space)
/// - Advance by dropping the oldest word and appending the newest
///
/// ## Invariants
/// - The window length is fixed for the lifetime of the value
/// - Slots never contain whitespace (they hold single tokens or are empty)
#[derive(Clone, Debug)]
pub struct Prefix {
	words: Vec<String>,
}

impl Prefix {
	/// Creates a fresh window of `len` empty-string slots.
	pub fn new(len: usize) -> Self {
		Self { words: vec![String::new(); len] }
	}

	/// Returns the canonical lookup key for the current window.
	///
	/// Words are joined by a single space. Empty slots contribute empty
	/// segments, so a fresh window of length 2 yields the key `" "`.
	pub fn key(&self) -> String {
		self.words.join(" ")
	}

	/// Advances the window: drops the oldest word, appends `word`.
	pub fn shift(&mut self, word: &str) {
		self.words.remove(0);
		self.words.push(word.to_owned());
	}
}
