//! Label wrapping and truncation.
//!
//! Node labels have to fit inside fixed-size symbols, so long names are either
//! broken onto a second line near the middle, packed onto at most three lines,
//! or cut short with an ellipsis. All lengths are counted in characters, not
//! bytes.

/// Maximum number of lines produced by [`wrap_lines`].
pub const MAX_WRAPPED_LINES: usize = 3;

/// How far (in characters) from the midpoint a break opportunity may sit.
const BREAK_SEARCH_RADIUS: usize = 5;

/// Characters that make an acceptable break point when no space is near the middle.
const BREAK_CHARS: [char; 4] = ['-', '&', '/', '|'];

const ELLIPSIS: &str = "...";

/// Wraps `text` so that it reads well inside a node of roughly `max_len` characters.
///
/// - Text that already fits, or already contains a newline, is returned unchanged.
/// - Text longer than twice `max_len` is packed onto up to three lines by [`wrap_lines`].
/// - Anything in between gets exactly one line break near the middle: a space
///   within five characters of the midpoint is preferred, then one of `- & / |`,
///   and otherwise the word is split at the midpoint.
pub fn wrap(text: &str, max_len: usize) -> String {
	if text.is_empty() {
		return String::new();
	}

	let chars: Vec<char> = text.chars().collect();
	if chars.len() <= max_len || text.contains('\n') {
		return text.to_string();
	}
	if chars.len() > 2 * max_len {
		return wrap_lines(text, max_len);
	}

	let mid = chars.len() / 2;

	if let Some(idx) = nearest_break(&chars, mid, |c| c == ' ') {
		let head: String = chars[..idx].iter().collect();
		let tail: String = chars[idx + 1..].iter().collect();
		return format!("{head}\n{tail}");
	}

	// Break after the separator so it stays on the first line.
	if let Some(idx) = nearest_break(&chars, mid, |c| BREAK_CHARS.contains(&c)) {
		let head: String = chars[..=idx].iter().collect();
		let tail: String = chars[idx + 1..].iter().collect();
		if !tail.is_empty() {
			return format!("{head}\n{tail}");
		}
	}

	let head: String = chars[..mid].iter().collect();
	let tail: String = chars[mid..].iter().collect();
	format!("{head}\n{tail}")
}

/// Greedily packs words onto lines of at most `max_len` characters.
///
/// Words longer than a line are hard-broken with a trailing hyphen. Output is
/// capped at [`MAX_WRAPPED_LINES`] lines; when text is dropped, the last kept
/// line ends in `...`.
pub fn wrap_lines(text: &str, max_len: usize) -> String {
	let max_len = max_len.max(2);
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut current_len = 0;

	for word in text.split_whitespace() {
		let word_len = word.chars().count();

		if word_len > max_len {
			if !current.is_empty() {
				lines.push(std::mem::take(&mut current));
			}
			let word_chars: Vec<char> = word.chars().collect();
			let mut rest = &word_chars[..];
			while rest.len() > max_len {
				let (piece, tail) = rest.split_at(max_len - 1);
				let mut line: String = piece.iter().collect();
				line.push('-');
				lines.push(line);
				rest = tail;
			}
			current = rest.iter().collect();
			current_len = rest.len();
			continue;
		}

		if current.is_empty() {
			current.push_str(word);
			current_len = word_len;
		} else if current_len + 1 + word_len <= max_len {
			current.push(' ');
			current.push_str(word);
			current_len += 1 + word_len;
		} else {
			lines.push(std::mem::replace(&mut current, word.to_string()));
			current_len = word_len;
		}
	}
	if !current.is_empty() {
		lines.push(current);
	}

	if lines.len() > MAX_WRAPPED_LINES {
		lines.truncate(MAX_WRAPPED_LINES);
		if let Some(last) = lines.last_mut() {
			let keep = max_len.saturating_sub(ELLIPSIS.len());
			let kept: String = last.chars().take(keep).collect();
			*last = format!("{}{ELLIPSIS}", kept.trim_end());
		}
	}

	lines.join("\n")
}

/// Shortens `text` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
	if text.chars().count() <= max_len {
		return text.to_string();
	}
	let kept: String = text.chars().take(max_len.saturating_sub(ELLIPSIS.len())).collect();
	format!("{kept}{ELLIPSIS}")
}

/// Finds the index of the matching character closest to `mid`, searching
/// outwards up to [`BREAK_SEARCH_RADIUS`] in both directions (left first on ties).
fn nearest_break(chars: &[char], mid: usize, is_break: impl Fn(char) -> bool) -> Option<usize> {
	(0..=BREAK_SEARCH_RADIUS).find_map(|offset| {
		let left = mid.checked_sub(offset).filter(|&i| is_break(chars[i]));
		let right = Some(mid + offset).filter(|&i| i < chars.len() && is_break(chars[i]));
		left.or(right)
	})
}
