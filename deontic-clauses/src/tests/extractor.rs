use super::fixtures::{self, sentence};
use crate::{extract_statements, Statement, StatementExtractor, SubjectStrategy};
use deontic_lexicon::Grammar;
use deontic_nlp::{Document, Sentence, SentenceDisplay, Token, TokenRef};

fn extract(rows: &str) -> Vec<Statement> {
    extract_statements(&sentence(rows), fixtures::lemmatize)
}

fn only(rows: &str) -> Statement {
    let mut statements = extract(rows);
    assert_eq!(statements.len(), 1, "{:#?}", statements);
    statements.remove(0)
}

/// Underline the tokens a statement was read from.
fn display(sentence: &Sentence, statement: &Statement) -> String {
    let mut display = SentenceDisplay::new(sentence);
    display.mark(statement.subject_index, statement.subject_index, "subject");
    if let Some(idx) = statement.modal_index {
        display.mark(idx, idx, "modal");
    }
    if let Some(idx) = statement.helping_verb_index {
        display.mark(idx, idx, "helping_verb");
    }
    display.mark(statement.verb_index, statement.verb_index, "verb");
    display.to_string()
}

#[test]
fn modal_with_open_complement() {
    let sentence = sentence(fixtures::MODAL_OBLIGATION);
    let statements = extract_statements(&sentence, fixtures::offline);
    assert_eq!(statements.len(), 1);

    insta::assert_snapshot!(display(&sentence, &statements[0]), @r###"
    Os  empregados  deverão  cumprir  o  horário
        ╰────────╯subject
                    ╰─────╯modal
                             ╰─────╯verb
    "###);

    let statement = &statements[0];
    assert_eq!(statement.subject_text, "empregados");
    assert_eq!(statement.subject_lemma, "empregado");
    assert_eq!(statement.modal_text, "deverão");
    assert_eq!(statement.modal_lemma, "dever");
    assert_eq!(statement.verb_lemma, "cumprir");
    assert_eq!(statement.helping_verb_lemma, "");
    assert_eq!(statement.negation, "");
    assert!(statement.has_modal);
    assert!(!statement.is_passive);
}

#[test]
fn negator_below_the_complement() {
    let statement = only(fixtures::NEGATED_PERMISSIVE);
    assert_eq!(statement.negation, "não");
    assert_eq!(statement.modal_lemma, "poder");
    assert_eq!(statement.verb_lemma, "descontar");
    assert!(statement.is_negated_by("NÃO"));
}

#[test]
fn negator_below_the_helping_verb() {
    // As férias não serão concedidas
    let sentence = Sentence::new(vec![
        Token::new("As", "o", "DET", "det", 1),
        Token::new("férias", "férias", "NOUN", "nsubj:pass", 4),
        Token::new("Não", "não", "ADV", "advmod", 3),
        Token::new("serão", "ser", "AUX", "aux:pass", 4),
        Token::new("concedidas", "conceder", "VERB", "root", 4),
    ])
    .unwrap();

    let statements = extract_statements(&sentence, fixtures::offline);
    assert_eq!(statements[0].helping_verb_text, "serão");
    assert_eq!(statements[0].negation, "não");
}

#[test]
fn passive_auxiliary_with_future_ending() {
    let sentence = sentence(fixtures::PASSIVE_FUTURE);
    let statements = extract_statements(&sentence, fixtures::offline);

    insta::assert_snapshot!(display(&sentence, &statements[0]), @r###"
    As  férias  serão  concedidas  pela  empresa
        ╰────╯subject
                ╰───╯helping_verb
                       ╰────────╯verb
    "###);

    let statement = &statements[0];
    assert_eq!(statement.helping_verb_lemma, "ser");
    assert_eq!(statement.verb_lemma, "conceder");
    // "serão" carries the future; no modal token exists
    assert_eq!(statement.modal_lemma, "ir");
    assert_eq!(statement.modal_text, "");
    assert_eq!(statement.modal_index, None);
    assert!(statement.has_modal);
    assert!(statement.is_passive);
}

#[test]
fn have_to_periphrasis() {
    let statement = only(fixtures::HAVE_TO);
    assert_eq!(statement.modal_text, "tem que");
    assert_eq!(statement.modal_lemma, "ter que");
    assert_eq!(statement.verb_lemma, "apresentar");
    assert!(statement.has_modal);
    assert!(!statement.is_passive);
}

#[test]
fn reflexive_future_relemmatizes_the_stem() {
    let statements = extract(fixtures::REFLEXIVE_FUTURE);
    assert_eq!(statements.len(), 2);

    let paid = &statements[0];
    assert_eq!(paid.subject_lemma, "adicional");
    assert_eq!(paid.verb_text, "pagar-se-á");
    assert_eq!(paid.verb_lemma, "pagar");
    assert_eq!(paid.modal_lemma, "ir");
    assert_eq!(paid.helping_verb_lemma, "se");
    assert_eq!(paid.helping_verb_text, "");
    assert!(paid.is_passive);

    let supplied = &statements[1];
    assert_eq!(supplied.subject_lemma, "empresa");
    assert_eq!(supplied.verb_lemma, "fornecer");
    assert_eq!(supplied.modal_lemma, "ir");
}

#[test]
fn failed_relemmatization_drops_only_that_clause() {
    let statements = extract_statements(&sentence(fixtures::REFLEXIVE_FUTURE), fixtures::offline);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].subject_lemma, "empresa");
}

#[test]
fn irregular_future_stem_needs_no_lemmatizer() {
    let statements = extract_statements(&sentence(fixtures::IRREGULAR_FUTURE), fixtures::offline);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].verb_lemma, "fazer");
    assert_eq!(statements[0].modal_lemma, "ir");
}

#[test]
fn embedded_reflexive_clitic() {
    let statement = only(fixtures::EMBEDDED_REFLEXIVE);
    assert_eq!(statement.verb_text, "compromete-se");
    assert_eq!(statement.verb_lemma, "comprometer");
    assert_eq!(statement.helping_verb_lemma, "se");
    assert!(!statement.has_modal);
    assert!(statement.is_passive);
}

#[test]
fn copula_becomes_the_predicate() {
    let statement = only(fixtures::COPULA);
    assert_eq!(statement.verb_text, "é");
    assert_eq!(statement.verb_lemma, "ser");
    assert_eq!(statement.verb_index, 2);
    assert_eq!(statement.helping_verb_lemma, "");
    assert!(!statement.is_passive);
}

#[test]
fn copula_with_verbal_complement_is_passive() {
    let statement = only(fixtures::COPULA_COMPLEMENT);
    assert_eq!(statement.helping_verb_text, "estão");
    assert_eq!(statement.verb_lemma, "obrigar");
    assert!(statement.is_passive);
}

#[test]
fn progressive_is_active() {
    let statement = only(fixtures::PROGRESSIVE);
    assert_eq!(statement.helping_verb_lemma, "estar");
    assert_eq!(statement.verb_text, "trabalhando");
    assert!(!statement.is_passive);
}

#[test]
fn modal_over_passive_complement() {
    let statement = only(fixtures::MODAL_PASSIVE);
    assert_eq!(statement.modal_lemma, "poder");
    assert_eq!(statement.modal_index, Some(2));
    assert_eq!(statement.helping_verb_lemma, "ser");
    assert_eq!(statement.helping_verb_index, Some(3));
    assert_eq!(statement.verb_lemma, "dispensar");
    assert!(statement.is_passive);
}

#[test]
fn auxiliary_go_is_adopted() {
    let statement = only(fixtures::AUXILIARY_GO);
    assert_eq!(statement.helping_verb_text, "vai");
    assert_eq!(statement.helping_verb_lemma, "ir");
    assert_eq!(statement.helping_verb_index, Some(2));
    assert_eq!(statement.verb_lemma, "receber");
    assert!(!statement.has_modal);
    assert!(!statement.is_passive);
}

#[test]
fn relative_pronoun_subject_is_skipped() {
    let statement = only(fixtures::RELATIVE_SUBJECT);
    assert_eq!(statement.subject_lemma, "empregado");
    assert_eq!(statement.verb_lemma, "perder");
    assert_eq!(statement.modal_lemma, "ir");
}

#[test]
fn short_sentence_yields_nothing() {
    assert!(extract(fixtures::TOO_SHORT).is_empty());
}

#[test]
fn has_modal_matches_modal_lemma() {
    let all = [
        fixtures::MODAL_OBLIGATION,
        fixtures::NEGATED_PERMISSIVE,
        fixtures::PASSIVE_FUTURE,
        fixtures::HAVE_TO,
        fixtures::REFLEXIVE_FUTURE,
        fixtures::IRREGULAR_FUTURE,
        fixtures::EMBEDDED_REFLEXIVE,
        fixtures::COPULA,
        fixtures::COPULA_COMPLEMENT,
        fixtures::PROGRESSIVE,
        fixtures::MODAL_PASSIVE,
        fixtures::AUXILIARY_GO,
        fixtures::RELATIVE_SUBJECT,
    ];
    for rows in all.iter() {
        for statement in extract(rows) {
            assert_eq!(statement.has_modal, !statement.modal_lemma.is_empty());
        }
    }
}

struct EverySubject;

impl SubjectStrategy for EverySubject {
    fn resolve<'s>(&self, _grammar: &Grammar, subject: TokenRef<'s>) -> Option<TokenRef<'s>> {
        Some(subject)
    }
}

#[test]
fn subject_strategy_is_pluggable() {
    let extractor = StatementExtractor::new(fixtures::lemmatize).with_subject_strategy(EverySubject);
    let statements = extractor.extract(&sentence(fixtures::RELATIVE_SUBJECT));
    let subjects: Vec<&str> = statements.iter().map(|s| s.subject_text.as_str()).collect();
    assert_eq!(subjects, vec!["empregado", "que"]);
}

#[test]
fn document_statements_are_located() {
    let document = Document::new(vec![
        sentence(fixtures::TOO_SHORT),
        sentence(fixtures::REFLEXIVE_FUTURE),
        sentence(fixtures::HAVE_TO),
    ]);
    let extractor = StatementExtractor::new(fixtures::lemmatize);
    let located = extractor.extract_document(&document, "CCT-2015-001");

    let positions: Vec<(usize, usize, &str)> = located
        .iter()
        .map(|s| (s.sentence_index, s.statement_index, s.statement.subject_lemma.as_str()))
        .collect();
    assert_eq!(
        positions,
        vec![(1, 0, "adicional"), (1, 1, "empresa"), (2, 0, "empregado")]
    );
    assert!(located.iter().all(|s| s.contract_id == "CCT-2015-001"));
}

#[test]
fn runs_as_a_sentence_resolver() {
    let sentence = sentence(fixtures::MODAL_OBLIGATION);
    let extractor = StatementExtractor::new(fixtures::lemmatize);
    assert_eq!(sentence.run(&extractor), extractor.extract(&sentence));
}

#[test]
fn serialized_field_names() {
    let statement = only(fixtures::HAVE_TO);
    let value = serde_json::to_value(&statement).unwrap();
    let object = value.as_object().unwrap();
    for field in [
        "subject_text",
        "subject_lemma",
        "negation",
        "modal_text",
        "modal_lemma",
        "helping_verb_text",
        "helping_verb_lemma",
        "verb_text",
        "verb_lemma",
        "is_passive",
        "has_modal",
    ]
    .iter()
    {
        assert!(object.contains_key(*field), "missing {}", field);
    }
    assert_eq!(object["modal_lemma"], "ter que");
}
