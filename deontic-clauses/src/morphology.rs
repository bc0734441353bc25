//! Recovery of modals and verb lemmas that Portuguese morphology hides from
//! the dependency tree.
//!
//! Steps run in a fixed order over a [`Draft`]; each only fires while the
//! slots it fills are still empty.

use crate::extractor::Draft;
use deontic_lexicon::Grammar;
use deontic_nlp::{LemmatizeError, Lemmatizer};

pub(crate) fn recover(
    grammar: &Grammar,
    lemmatizer: &dyn Lemmatizer,
    draft: &mut Draft<'_>,
) -> Result<(), LemmatizeError> {
    have_to_periphrasis(grammar, draft);
    adopt_auxiliary(grammar, draft);
    reflexive_future(grammar, lemmatizer, draft)?;
    periphrastic_future(grammar, draft);
    embedded_reflexive(grammar, lemmatizer, draft)?;
    Ok(())
}

/// "tem que cumprir": a "ter" child plus a "que" child make a "ter que" modal.
fn have_to_periphrasis(grammar: &Grammar, draft: &mut Draft<'_>) {
    if !draft.modal_lemma.is_empty() {
        return;
    }

    let mut have = None;
    let mut complementizer = false;
    for child in draft.verb.children() {
        let lemma = child.lemma_lower();
        if have.is_none() && lemma == grammar.have_lemma {
            have = Some(child);
        } else if lemma == grammar.complementizer {
            complementizer = true;
        }
    }

    if let (Some(have), true) = (have, complementizer) {
        draft.modal_text = format!("{} {}", have.text(), grammar.complementizer);
        draft.modal_lemma = grammar.have_to_lemma.clone();
    }
}

/// "vai receber": adopt an auxiliary child ("ir", "haver", "ter") as helping verb.
fn adopt_auxiliary(grammar: &Grammar, draft: &mut Draft<'_>) {
    if !draft.helping_verb_lemma.is_empty() || draft.modal_lemma == grammar.have_to_lemma {
        return;
    }

    let auxiliary = draft
        .verb
        .children()
        .filter(|t| t.dep() == grammar.relations.auxiliary && grammar.is_auxiliary_verb(&t.lemma_lower()))
        .last();
    if let Some(auxiliary) = auxiliary {
        // keep the token, not just its text: negators below it count
        draft.set_helping_verb(auxiliary);
    }
}

/// "pagar-se-á": mesoclitic future. Marks a future modal and a reflexive
/// helping verb, and recovers the infinitive from the stem.
fn reflexive_future(
    grammar: &Grammar,
    lemmatizer: &dyn Lemmatizer,
    draft: &mut Draft<'_>,
) -> Result<(), LemmatizeError> {
    if !draft.helping_verb_lemma.is_empty() || !draft.modal_lemma.is_empty() {
        return Ok(());
    }
    let suffix = match grammar.reflexive_future_suffix(&draft.verb_text) {
        Some(suffix) => suffix,
        None => return Ok(()),
    };

    let stem = draft.verb_text[..draft.verb_text.len() - suffix.len()].to_lowercase();
    let lemma = match grammar.irregular_infinitive(&stem) {
        Some(infinitive) => infinitive.to_string(),
        None => lemmatizer.lemmatize(&stem)?.to_lowercase(),
    };

    draft.modal_lemma = grammar.future_modal_lemma.clone();
    draft.helping_verb_lemma = grammar.reflexive_clitic.clone();
    draft.verb_lemma = lemma;
    Ok(())
}

/// "fornecerá", "serão concedidas": a third-person future ending on the verb
/// or helping verb counts as the strict future modal.
fn periphrastic_future(grammar: &Grammar, draft: &mut Draft<'_>) {
    if !draft.modal_lemma.is_empty() {
        return;
    }
    if grammar.has_future_suffix(&draft.verb_text)
        || grammar.has_future_suffix(&draft.helping_verb_text)
    {
        draft.modal_lemma = grammar.future_modal_lemma.clone();
    }
}

/// "compromete-se": a clitic attached to the verb form. The helping verb
/// becomes the reflexive clitic and the stem is re-lemmatized.
fn embedded_reflexive(
    grammar: &Grammar,
    lemmatizer: &dyn Lemmatizer,
    draft: &mut Draft<'_>,
) -> Result<(), LemmatizeError> {
    if !draft.helping_verb_lemma.is_empty() || !draft.verb_text.contains(&grammar.reflexive_marker) {
        return Ok(());
    }

    let stem = draft
        .verb_text
        .split(grammar.reflexive_marker.as_str())
        .next()
        .unwrap_or_default()
        .to_string();
    draft.helping_verb_lemma = grammar.reflexive_clitic.clone();
    draft.verb_lemma = lemmatizer.lemmatize(&stem)?.to_lowercase();
    Ok(())
}
