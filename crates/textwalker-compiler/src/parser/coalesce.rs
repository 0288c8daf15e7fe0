use textwalker_core::{PatternNode, Quantifier, Term};

/// Merge adjacent unquantified literal terms into one literal.
///
/// `L[a] L[b] L[c]*` becomes `L[ab] L[c]*`: a quantified literal keeps its own
/// term, so the quantifier still binds to the single character it followed.
/// Relative order of all terms is unchanged.
pub fn coalesce_literals(terms: Vec<Term>) -> Vec<Term> {
    let mut out: Vec<Term> = Vec::with_capacity(terms.len());

    for term in terms {
        if let Some(prev) = out.last_mut()
            && prev.quantifier == Quantifier::ExactlyOne
            && term.quantifier == Quantifier::ExactlyOne
            && let PatternNode::Literal { text: acc } = &mut prev.node
            && let PatternNode::Literal { text } = &term.node
        {
            acc.push_str(text);
            prev.span = prev.span.cover(term.span);
            continue;
        }
        out.push(term);
    }

    out
}
