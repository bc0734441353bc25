use crate::{write_json_lines, ProvisionClassifier, VerbCategory};
use deontic_clauses::StatementExtractor;
use deontic_nlp::{conllu, Document, LemmatizeError};

/// Rows are `FORM LEMMA UPOS HEAD DEPREL`; blank lines separate sentences.
fn document(rows: &str) -> Document {
    let mut out = String::new();
    let mut id = 0;
    for line in rows.lines().map(str::trim) {
        if line.is_empty() {
            id = 0;
            out.push('\n');
            continue;
        }
        id += 1;
        let cols: Vec<&str> = line.split_whitespace().collect();
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t_\t_\t{}\t{}\t_\t_\n",
            id, cols[0], cols[1], cols[2], cols[3], cols[4]
        ));
    }
    conllu::parse_document(&out).unwrap()
}

const CONTRACT: &str = "
    Os            o            DET   2 det
    empregados    empregado    NOUN  3 nsubj
    deverão       dever        VERB  0 root
    cumprir       cumprir      VERB  3 xcomp
    o             o            DET   6 det
    horário       horário      NOUN  4 obj

    A             o            DET   2 det
    empresa       empresa      NOUN  4 nsubj
    não           não          ADV   5 advmod
    poderá        poder        VERB  0 root
    descontar     descontar    VERB  4 xcomp
    os            o            DET   7 det
    dias          dia          NOUN  5 obj

    As            o            DET   2 det
    férias        férias       NOUN  4 nsubj:pass
    serão         ser          AUX   4 aux:pass
    concedidas    conceder     VERB  0 root
    pela          por          ADP   6 case
    empresa       empresa      NOUN  4 obl:agent

    A             o            DET   2 det
    empresa       empresa      NOUN  3 nsubj
    compromete-se comprometer  VERB  0 root
    a             a            SCONJ 5 mark
    pagar         pagar        VERB  3 xcomp
    as            o            DET   7 det
    horas         hora         NOUN  5 obj
    extras        extra        ADJ   7 amod

    O             o            DET   2 det
    desconto      desconto     NOUN  5 nsubj:pass
    não           não          ADV   5 advmod
    será          ser          AUX   5 aux:pass
    permitido     permitir     VERB  0 root
";

fn lemmatize(stem: &str) -> Result<String, LemmatizeError> {
    match stem {
        "compromete" => Ok("comprometer".to_string()),
        _ => Err(LemmatizeError::new(stem, "unknown stem")),
    }
}

#[test]
fn contract_to_labelled_rows() {
    let extractor = StatementExtractor::new(lemmatize);
    let statements = extractor.extract_document(&document(CONTRACT), "cct-001");
    let rows = ProvisionClassifier::new().classify_document(&statements);

    let summary: Vec<String> = rows
        .iter()
        .map(|row| {
            let provisions: Vec<&str> = row.classified.provisions().iter().map(|p| p.as_str()).collect();
            let verbs: Vec<String> = row
                .classified
                .signals
                .verbs
                .categories()
                .iter()
                .map(VerbCategory::to_string)
                .collect();
            format!(
                "{}.{} {} [{}] {} verbs={}",
                row.sentence_index,
                row.statement_index,
                row.classified.statement.subject_text,
                row.classified.subject_category,
                provisions.join(","),
                if verbs.is_empty() { "-".to_string() } else { verbs.join(",") }
            )
        })
        .collect();

    insta::assert_snapshot!(summary.join("\n"), @r###"
    0.0 empregados [worker] obligation verbs=-
    1.0 empresa [firm] constraint verbs=-
    2.0 férias [other] entitlement verbs=entitlement
    3.0 empresa [firm] obligation verbs=obligation
    4.0 desconto [other] constraint verbs=permission
    "###);
}

#[test]
fn rows_export_as_json_lines() {
    let extractor = StatementExtractor::new(lemmatize);
    let statements = extractor.extract_document(&document(CONTRACT), "cct-001");
    let rows = ProvisionClassifier::new().classify_document(&statements);

    let mut buffer = Vec::new();
    assert_eq!(write_json_lines(&mut buffer, &rows).unwrap(), 5);

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);

    let first = &lines[0];
    assert_eq!(first["contract_id"], "cct-001");
    assert_eq!(first["subject_lemma"], "empregado");
    assert_eq!(first["subject_category"], "worker");
    assert_eq!(first["strict_modal"], true);
    assert_eq!(first["obligation_1"], true);
    assert_eq!(first["obligation"], true);
    assert_eq!(first["other_provision"], false);

    assert_eq!(lines[1]["negated"], true);
    assert_eq!(lines[1]["negation"], "não");
    assert_eq!(lines[3]["obligation_verb"], true);

    // O desconto não será permitido
    let refused = &lines[4];
    assert_eq!(refused["modal_lemma"], "ir");
    assert_eq!(refused["permission_verb"], true);
    assert_eq!(refused["constraint_1"], true);
    assert_eq!(refused["constraint_3"], true);
    assert_eq!(refused["permission"], false);
}
