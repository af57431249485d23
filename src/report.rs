//! Plain-text report for console output (demo binary, debugging).

use std::fmt::Write as _;

use crate::decision::Classification;

/// Multi-line report: text, the four frequencies, score, label and fired rules.
pub fn render(text: &str, c: &Classification) -> String {
    let f = &c.features;
    let mut out = String::new();
    let _ = writeln!(out, "Text: {text}");
    let _ = writeln!(out, "Positive word frequency (FP): {:.2}", f.fp);
    let _ = writeln!(out, "Negative word frequency (FN): {:.2}", f.fn_);
    let _ = writeln!(out, "Intensifier frequency (I): {:.2}", f.i);
    let _ = writeln!(out, "Negation frequency (N): {:.2}", f.n);
    let _ = writeln!(out, "Fuzzy score (PS): {:.2}", c.score);
    let _ = writeln!(out, "Sentiment: {}", c.label);

    let mut fired = c.fired().peekable();
    if fired.peek().is_none() {
        let _ = writeln!(out, "Rules fired: none (neutral default)");
    } else {
        let _ = writeln!(out, "Rules fired:");
        for a in fired {
            let _ = writeln!(
                out,
                "  {:<28} activation {:.2} -> target {:.2}",
                a.rule_id, a.activation, a.target
            );
        }
    }
    out
}
