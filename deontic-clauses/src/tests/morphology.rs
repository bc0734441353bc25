use super::fixtures::{self, sentence};
use crate::{extract_statements, Statement};
use deontic_nlp::{Sentence, Token};

fn single(sentence: &Sentence) -> Statement {
    let mut statements = extract_statements(sentence, fixtures::lemmatize);
    assert_eq!(statements.len(), 1, "{:#?}", statements);
    statements.remove(0)
}

#[test]
fn future_ending_does_not_replace_a_modal() {
    // "deverão" ends like a future but is already the modal
    let statement = single(&sentence(fixtures::MODAL_OBLIGATION));
    assert_eq!(statement.modal_lemma, "dever");
}

#[test]
fn have_to_blocks_auxiliary_adoption() {
    let statement = single(&sentence(fixtures::HAVE_TO));
    assert_eq!(statement.helping_verb_lemma, "");
    assert_eq!(statement.helping_verb_index, None);
}

#[test]
fn reflexive_future_takes_precedence_over_plain_future() {
    let statement = single(&sentence(fixtures::IRREGULAR_FUTURE));
    assert_eq!(statement.helping_verb_lemma, "se");
    assert!(statement.is_passive);
}

#[test]
fn capitalized_reflexive_future_stem() {
    let sentence = Sentence::new(vec![
        Token::new("Far-se-á", "fazer", "VERB", "root", 0),
        Token::new("o", "o", "DET", "det", 2),
        Token::new("pagamento", "pagamento", "NOUN", "nsubj", 0),
        Token::new("mensalmente", "mensalmente", "ADV", "advmod", 0),
    ])
    .unwrap();
    assert_eq!(single(&sentence).verb_lemma, "fazer");
}

#[test]
fn embedded_clitic_keeps_stem_case() {
    // Obriga-se o empregador a fornecer
    let sentence = Sentence::new(vec![
        Token::new("Obriga-se", "obrigar", "VERB", "root", 0),
        Token::new("o", "o", "DET", "det", 2),
        Token::new("empregador", "empregador", "NOUN", "nsubj", 0),
        Token::new("a", "a", "ADP", "mark", 4),
        Token::new("fornecer", "fornecer", "VERB", "xcomp", 0),
    ])
    .unwrap();

    let statement = single(&sentence);
    assert_eq!(statement.verb_text, "Obriga-se");
    assert_eq!(statement.verb_lemma, "obrigar");
    assert_eq!(statement.helping_verb_lemma, "se");
}

#[test]
fn last_auxiliary_is_adopted() {
    // O empregado vai ter recebido o prêmio
    let sentence = Sentence::new(vec![
        Token::new("O", "o", "DET", "det", 1),
        Token::new("empregado", "empregado", "NOUN", "nsubj", 4),
        Token::new("vai", "ir", "AUX", "aux", 4),
        Token::new("ter", "ter", "AUX", "aux", 4),
        Token::new("recebido", "receber", "VERB", "root", 4),
        Token::new("o", "o", "DET", "det", 6),
        Token::new("prêmio", "prêmio", "NOUN", "obj", 4),
    ])
    .unwrap();

    let statement = single(&sentence);
    assert_eq!(statement.helping_verb_text, "ter");
    assert_eq!(statement.helping_verb_index, Some(3));
    assert!(!statement.is_passive);
}

#[test]
fn have_guaranteed_reads_as_passive() {
    // O empregado tem garantido o emprego
    let sentence = Sentence::new(vec![
        Token::new("O", "o", "DET", "det", 1),
        Token::new("empregado", "empregado", "NOUN", "nsubj", 3),
        Token::new("tem", "ter", "AUX", "aux", 3),
        Token::new("garantido", "garantir", "VERB", "root", 3),
        Token::new("o", "o", "DET", "det", 5),
        Token::new("emprego", "emprego", "NOUN", "obj", 3),
    ])
    .unwrap();

    let statement = single(&sentence);
    assert_eq!(statement.helping_verb_lemma, "ter");
    assert_eq!(statement.verb_lemma, "garantir");
    assert!(statement.is_passive);
}

#[test]
fn plural_future_ending() {
    let sentence = Sentence::new(vec![
        Token::new("Os", "o", "DET", "det", 1),
        Token::new("empregados", "empregado", "NOUN", "nsubj", 2),
        Token::new("receberão", "receber", "VERB", "root", 2),
        Token::new("uniformes", "uniforme", "NOUN", "obj", 2),
    ])
    .unwrap();

    let statement = single(&sentence);
    assert_eq!(statement.modal_lemma, "ir");
    assert_eq!(statement.modal_text, "");
    assert!(statement.has_modal);
}

#[test]
fn negator_below_adopted_auxiliary() {
    // O empregado não vai receber o prêmio
    let sentence = Sentence::new(vec![
        Token::new("O", "o", "DET", "det", 1),
        Token::new("empregado", "empregado", "NOUN", "nsubj", 4),
        Token::new("não", "não", "ADV", "advmod", 3),
        Token::new("vai", "ir", "AUX", "aux", 4),
        Token::new("receber", "receber", "VERB", "root", 4),
        Token::new("o", "o", "DET", "det", 6),
        Token::new("prêmio", "prêmio", "NOUN", "obj", 4),
    ])
    .unwrap();

    let statement = single(&sentence);
    assert_eq!(statement.helping_verb_index, Some(3));
    assert_eq!(statement.negation, "não");
}
