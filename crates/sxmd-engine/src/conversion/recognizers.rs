use super::{
    kinds::{Comment, DropBlock, InlineMath, Macro, NonBreakingSpace},
    scanner::Scanner,
};

/// A recognizer either declines (returns `false`, consumes nothing) or
/// consumes at least one character and returns `true`.
///
/// Declining recognizers may still have side effects on the mode flag; see
/// [`try_inline_math`].
pub type Recognizer = fn(&mut Scanner) -> bool;

/// Recognizers in priority order. Comments and drop blocks come first so
/// macro-like text inside them is never re-hidden.
pub const CHAIN: [Recognizer; 7] = [
    try_comment,
    try_drop_block,
    try_macro_command,
    try_macro_block,
    try_inline_math,
    try_alt_inline_math,
    try_non_breaking_space,
];

/// Copies a `<!-- ... -->` comment through unchanged.
///
/// An unterminated comment still gets its `-->` so the output stays
/// well-formed.
pub fn try_comment(s: &mut Scanner) -> bool {
    if !s.cur.starts_with(Comment::OPEN) {
        return false;
    }

    while !s.cur.at_end() && !s.cur.starts_with(Comment::CLOSE) {
        s.copy_current();
    }
    s.out.push_str(Comment::CLOSE);
    s.cur.bump_n(Comment::CLOSE.len());

    true
}

/// Skips a `<![CDATA[ ... ]]>` block without emitting anything.
pub fn try_drop_block(s: &mut Scanner) -> bool {
    if !s.cur.starts_with(DropBlock::OPEN) {
        return false;
    }

    while !s.cur.at_end() && !s.cur.starts_with(DropBlock::CLOSE) {
        s.cur.bump();
    }
    s.cur.bump_n(DropBlock::CLOSE.len());

    true
}

/// Escape character that starts a macro. A doubled escape is left to the
/// default action, and nothing counts as a macro inside inline math.
fn at_macro_escape(s: &Scanner) -> bool {
    !s.in_inline_math
        && s.cur.current() == Some(Macro::ESCAPE)
        && s.cur.next() != Some(Macro::ESCAPE)
}

/// Hides a single command such as `\cite[p. 4]{knuth}` in a comment.
pub fn try_macro_command(s: &mut Scanner) -> bool {
    if !at_macro_escape(s)
        || s.cur.next() == Some(InlineMath::DELIMITER)
        || s.cur.lookahead_is(Macro::BEGIN)
    {
        return false;
    }

    scan_macro_command(s, true);
    true
}

/// Hides a whole `\begin{..} ... \end{..}` block, including nested blocks,
/// in one comment.
pub fn try_macro_block(s: &mut Scanner) -> bool {
    if !at_macro_escape(s) || !s.cur.lookahead_is(Macro::BEGIN) {
        return false;
    }

    scan_macro_block(s);
    true
}

/// Consumes a command name and its argument groups.
///
/// The name runs from the escape up to whitespace, `{` or `[`. Argument
/// groups follow back to back; `{` and `[` share one counter, so
/// `\foo{a]` balances.
fn scan_macro_command(s: &mut Scanner, wrap: bool) {
    if wrap {
        s.out.push_str(Comment::OPEN);
    }

    while let Some(c) = s.cur.current()
        && !Macro::ends_name(c)
    {
        s.out.push(c);
        s.cur.bump();
    }

    let mut nesting = 0usize;
    while let Some(c) = s.cur.current() {
        // \foo{bar}{baz} test
        //               ^ no further group
        if nesting == 0 && !Macro::is_arg_open(c) {
            break;
        }

        if Macro::is_arg_open(c) {
            nesting += 1;
        } else if Macro::is_arg_close(c) {
            nesting -= 1;
        }

        s.out.push(c);
        s.cur.bump();
    }

    if wrap {
        s.out.push_str(Comment::CLOSE);
    }
}

/// Environment names are not matched: `\begin{figure} ... \end{math}` closes.
///
/// Without a final `\end` the block runs to end of input and no closing
/// comment is emitted.
fn scan_macro_block(s: &mut Scanner) {
    s.out.push_str(Comment::OPEN);
    let mut depth = 0usize;

    while !s.cur.at_end() {
        if s.cur.current() == Some(Macro::ESCAPE) {
            if s.cur.lookahead_is(Macro::BEGIN) {
                depth += 1;
            } else if s.cur.lookahead_is(Macro::END) {
                depth -= 1;
            }
        }

        // At the outermost \end the rest is an ordinary command:
        //
        //      \end{figure*}
        //      ^
        if depth == 0 {
            scan_macro_command(s, false);
            s.out.push_str(Comment::CLOSE);
            break;
        }

        s.copy_current();
    }
}

/// Tracks `$` delimiters.
///
/// `\$` is passed through as a literal dollar. A bare `$` opens math only
/// when the flag is clear and it follows a space, and closes math
/// whenever the flag is set. The bare delimiter itself is left for the
/// default action, so this recognizer declines after updating the flag.
pub fn try_inline_math(s: &mut Scanner) -> bool {
    if s.cur.current() == Some(Macro::ESCAPE) && s.cur.next() == Some(InlineMath::DELIMITER) {
        s.out.push(Macro::ESCAPE);
        s.out.push(InlineMath::DELIMITER);
        s.cur.bump_n(2);
        return true;
    }

    if s.cur.current() != Some(InlineMath::DELIMITER) {
        return false;
    }

    if !s.in_inline_math && s.cur.prev() == Some(InlineMath::OPENS_AFTER) {
        s.in_inline_math = true;
    } else if s.in_inline_math {
        s.in_inline_math = false;
    }

    false
}

/// Rewrites the `•` marker into a hidden `$` pair: `<!--$` when opening and
/// `$-->` when closing.
pub fn try_alt_inline_math(s: &mut Scanner) -> bool {
    if s.cur.current() != Some(InlineMath::ALT_MARKER) {
        return false;
    }

    if s.in_inline_math {
        s.in_inline_math = false;
        s.out.push_str(InlineMath::ALT_CLOSE);
    } else {
        s.in_inline_math = true;
        s.out.push_str(InlineMath::ALT_OPEN);
    }
    s.cur.bump();

    true
}

/// Replaces `~` with a `<!--~-->` marker.
///
/// Checked both one character ahead and on the tilde itself, since after a
/// consumed macro the cursor can land directly on it.
pub fn try_non_breaking_space(s: &mut Scanner) -> bool {
    let current = s.cur.current();
    let ahead = current != Some(Macro::ESCAPE) && s.cur.next() == Some(NonBreakingSpace::TILDE);
    let on = current == Some(NonBreakingSpace::TILDE) && s.cur.prev() != Some(Macro::ESCAPE);
    if !ahead && !on {
        return false;
    }

    match current {
        Some(c) if c != NonBreakingSpace::TILDE => {
            s.out.push(c);
            s.cur.bump_n(2);
        }
        _ => s.cur.bump(),
    }
    s.out.push_str(NonBreakingSpace::MARKER);

    true
}
