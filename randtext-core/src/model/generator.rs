use rand::Rng;
use rand::seq::IndexedRandom;

use super::prefix::Prefix;
use super::suffix_model::SuffixModel;

/// Generates word sequences by walking a populated [`SuffixModel`].
///
/// A `Generator` borrows the model for the duration of its calls; it never
/// mutates it and holds no state of its own between calls.
///
/// # Responsibilities
/// - Walk the suffix table starting from the all-empty prefix window
/// - Draw one successor at a time, uniformly over stored occurrences
/// - Bound the walk by the requested word count and stop early when the
///   current prefix has no recorded successors
///
/// # Notes
/// - Every generation starts cold, independent of what was fed last.
/// - A lookup miss is a normal terminal condition, not a failure; the
///   output is simply shorter than requested.
#[derive(Debug)]
pub struct Generator<'m> {
	model: &'m SuffixModel,
}

impl<'m> Generator<'m> {
	/// Creates a generator reading from `model`.
	pub fn new(model: &'m SuffixModel) -> Self {
		Self { model }
	}

	/// Generates up to `max_words` words using the process random source.
	///
	/// # Errors
	/// Returns an error if the model's table is empty (no text was ever fed).
	pub fn generate(&self, max_words: usize) -> Result<Vec<String>, String> {
		self.generate_with(max_words, &mut rand::rng())
	}

	/// Generates up to `max_words` words, sampling from `rng`.
	///
	/// Passing an explicit random source pins the walk, so callers can
	/// reproduce a sequence exactly from the same model and seed.
	///
	/// # Errors
	/// Returns an error if the model's table is empty.
	pub fn generate_with<R: Rng + ?Sized>(
		&self,
		max_words: usize,
		rng: &mut R,
	) -> Result<Vec<String>, String> {
		if self.model.is_empty() {
			return Err("cannot generate: some text must be fed first".to_owned());
		}

		let mut prefix = Prefix::new(self.model.prefix_len());
		let mut words = Vec::with_capacity(max_words);

		for _ in 0..max_words {
			// Each stored occurrence is an equally likely draw, so repeated
			// successors are proportionally more likely to be chosen.
			let word = match self.model.successors(&prefix.key()).and_then(|s| s.choose(rng)) {
				Some(word) => word.clone(),
				None => break,
			};
			prefix.shift(&word);
			words.push(word);
		}

		Ok(words)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn model_from(prefix_len: usize, text: &str) -> SuffixModel {
		let mut model = SuffixModel::new(prefix_len).expect("valid prefix length");
		model.feed(text.as_bytes()).expect("in-memory feed failed");
		model
	}

	#[test]
	fn empty_model_is_an_error() {
		let model = SuffixModel::new(2).expect("valid prefix length");
		let generator = Generator::new(&model);
		assert!(generator.generate(5).is_err());
		assert!(generator.generate(0).is_err());
	}

	#[test]
	fn zero_words_yields_empty_output() {
		let model = model_from(2, "the cat sat on the mat");
		let words = Generator::new(&model).generate(0).expect("model is populated");
		assert!(words.is_empty());
	}

	#[test]
	fn output_never_exceeds_the_requested_count() {
		let model = model_from(2, "a b c a b d a c e b a d");
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(11);
		for max_words in 0..20 {
			let words = generator.generate_with(max_words, &mut rng).expect("model is populated");
			assert!(words.len() <= max_words);
		}
	}

	#[test]
	fn single_path_input_is_reproduced_verbatim() {
		// Only one successor exists at every step, so the walk is the same
		// for any random source.
		let model = model_from(2, "the cat sat on the mat");
		let generator = Generator::new(&model);
		let mut rng = StdRng::seed_from_u64(7);

		let words = generator.generate_with(3, &mut rng).expect("model is populated");
		assert_eq!(words, vec!["the", "cat", "sat"]);

		let words = generator.generate_with(10, &mut rng).expect("model is populated");
		assert_eq!(words, vec!["the", "cat", "sat", "on", "the", "mat"]);
	}

	#[test]
	fn walk_stops_early_when_a_prefix_has_no_successors() {
		let model = model_from(2, "one two three");
		let words = Generator::new(&model)
			.generate_with(100, &mut StdRng::seed_from_u64(3))
			.expect("model is populated");
		assert_eq!(words, vec!["one", "two", "three"]);
	}

	#[test]
	fn every_emitted_word_comes_from_the_active_prefix() {
		let model = model_from(2, "a b c a b d b c a d a b c e a");
		let words = Generator::new(&model)
			.generate_with(50, &mut StdRng::seed_from_u64(42))
			.expect("model is populated");
		assert!(!words.is_empty());

		// Replay the walk and check membership at every step.
		let mut prefix = Prefix::new(model.prefix_len());
		for word in &words {
			let successors = model.successors(&prefix.key()).expect("active prefix missing");
			assert!(successors.iter().any(|s| s == word));
			prefix.shift(word);
		}
	}

	#[test]
	fn same_seed_reproduces_the_same_walk() {
		let model = model_from(2, "a b c a b d b c a d a b c e a");
		let generator = Generator::new(&model);
		let first = generator
			.generate_with(30, &mut StdRng::seed_from_u64(9))
			.expect("model is populated");
		let second = generator
			.generate_with(30, &mut StdRng::seed_from_u64(9))
			.expect("model is populated");
		assert_eq!(first, second);
	}
}
