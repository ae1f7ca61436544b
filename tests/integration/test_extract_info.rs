//! Record extraction against fixture EFetch documents (no network)

mod common;

use common::{ACME_EFETCH_XML, THREE_ARTICLES_XML};
use pubmed_paper_fetcher::pubmed::parse_metadata_document;
use pubmed_paper_fetcher::{ExtractedRecord, extract_info};
use rstest::rstest;

fn extract_single(xml: &str) -> ExtractedRecord {
    let document = parse_metadata_document(xml).unwrap();
    assert_eq!(document.len(), 1, "fixture should hold one article");
    extract_info(&document.articles[0])
}

fn article_with_affiliation(affiliation: &str) -> String {
    format!(
        r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>40000000</PMID>
      <Article>
        <ArticleTitle>Keyword check</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>Keyes</LastName>
            <ForeName>Pat</ForeName>
            <AffiliationInfo><Affiliation>{affiliation}</Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#
    )
}

#[test]
fn test_acme_fixture() {
    let record = extract_single(ACME_EFETCH_XML);

    assert_eq!(record.pubmed_id, "12345678");
    assert_eq!(record.title, "Test Article");
    assert!(record.non_academic_authors.contains("Jane Doe"));
    assert!(record.company_affiliations.contains("ACME Biotech Inc."));
    assert_eq!(record.corresponding_author_email, "jane.doe@acmebio.com");
    // ArticleDate is not the journal PubDate
    assert_eq!(record.publication_date, "");
}

#[test]
fn test_company_affiliation_populates_one_entry_each() {
    let record = extract_single(ACME_EFETCH_XML);

    assert_eq!(record.non_academic_authors, "Jane Doe");
    assert_eq!(
        record.company_affiliations,
        "ACME Biotech Inc., New York, USA. jane.doe@acmebio.com"
    );
}

#[test]
fn test_no_affiliation_info_yields_empty_fields() {
    let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>22222222</PMID>
      <Article>
        <Journal><JournalIssue><PubDate><Year>1999</Year></PubDate></JournalIssue></Journal>
        <ArticleTitle>No affiliations here</ArticleTitle>
        <AuthorList>
          <Author><LastName>Solo</LastName><ForeName>Han</ForeName></Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    let record = extract_single(xml);

    assert_eq!(record.pubmed_id, "22222222");
    assert_eq!(record.publication_date, "1999");
    assert_eq!(record.non_academic_authors, "");
    assert_eq!(record.company_affiliations, "");
    assert_eq!(record.corresponding_author_email, "");
}

#[test]
fn test_non_keyword_affiliation_still_scanned_for_email() {
    let record = extract_single(&article_with_affiliation(
        "Max Planck Society, Munich, Germany. pat.keyes@mpg.example",
    ));

    assert_eq!(record.non_academic_authors, "");
    assert_eq!(record.company_affiliations, "");
    assert_eq!(record.corresponding_author_email, "pat.keyes@mpg.example");
}

#[test]
fn test_empty_affiliation_is_ignored() {
    let record = extract_single(&article_with_affiliation(""));

    assert_eq!(record.company_affiliations, "");
    assert_eq!(record.corresponding_author_email, "");
}

#[test]
fn test_attributed_superscript_in_affiliation() {
    let record = extract_single(&article_with_affiliation(
        r#"Roche <sup id="af1">1</sup> GmbH, Penzberg. eva@roche.example"#,
    ));

    assert_eq!(record.non_academic_authors, "Pat Keyes");
    assert_eq!(
        record.company_affiliations,
        "Roche 1 GmbH, Penzberg. eva@roche.example"
    );
    assert_eq!(record.corresponding_author_email, "eva@roche.example");
}

#[test]
fn test_mathml_in_affiliation_keeps_surrounding_text() {
    let record = extract_single(&article_with_affiliation(
        r#"Bayer <mml:math><mml:mi>AG</mml:mi></mml:math> Pharma, Berlin"#,
    ));

    assert_eq!(record.company_affiliations, "Bayer Pharma, Berlin");
}

#[rstest]
#[case("Pfizer Inc., New York, NY", true)]
#[case("GlaxoSmithKline Ltd, Stevenage, UK", true)]
#[case("Evotec SE and Evotec GmbH, Hamburg", true)]
#[case("Moderna Therapeutics, Cambridge, MA", true)]
#[case("Abbott Laboratories, Chicago", true)]
#[case("IBM Corporation, Armonk", true)]
#[case("Genmab Biotech A/S, Copenhagen", true)]
#[case("Department of Medicine, University of Oxford", false)]
#[case("Karolinska Institutet, Stockholm", false)]
#[case("Mayo Clinic College of Medicine, Rochester", false)]
fn test_company_keyword_detection(#[case] affiliation: &str, #[case] is_company: bool) {
    let record = extract_single(&article_with_affiliation(affiliation));

    assert_eq!(record.has_company_authors(), is_company, "{affiliation:?}");
    if is_company {
        assert_eq!(record.non_academic_authors, "Pat Keyes");
        assert_eq!(record.company_affiliations, affiliation);
    } else {
        assert_eq!(record.non_academic_authors, "");
    }
}

#[test]
fn test_three_article_document() {
    let document = parse_metadata_document(THREE_ARTICLES_XML).unwrap();
    let records = document.records();

    assert_eq!(records.len(), document.len());
    let ids: Vec<&str> = records.iter().map(|r| r.pubmed_id.as_str()).collect();
    assert_eq!(ids, vec!["31978945", "33515491", "25760099"]);

    // Academic-only authors: no list entries, email still captured
    assert_eq!(records[0].publication_date, "2020");
    assert_eq!(records[0].non_academic_authors, "");
    assert_eq!(records[0].corresponding_author_email, "zdy@example.cn");

    // Two company authors, first email wins
    assert_eq!(records[1].publication_date, "2021 Jan-Feb");
    assert_eq!(records[1].non_academic_authors, "Sarah Miller; Chidi Okafor");
    assert_eq!(
        records[1].company_affiliations,
        "Regeneron Pharmaceuticals, Tarrytown, NY, USA. sarah.miller@regeneron.example; Amgen Inc., Thousand Oaks, CA, USA."
    );
    assert_eq!(
        records[1].corresponding_author_email,
        "sarah.miller@regeneron.example"
    );

    assert_eq!(records[2].title, "Editorial without affiliations.");
    assert_eq!(records[2].publication_date, "");
    assert!(!records[2].has_company_authors());
}

#[test]
fn test_first_email_across_authors_wins() {
    let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>33333333</PMID>
      <Article>
        <ArticleTitle>Email order</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>NoMail</LastName>
            <AffiliationInfo><Affiliation>Roche Diagnostics GmbH, Penzberg</Affiliation></AffiliationInfo>
          </Author>
          <Author>
            <LastName>First</LastName>
            <AffiliationInfo><Affiliation>Leiden University. first@leiden.example</Affiliation></AffiliationInfo>
          </Author>
          <Author>
            <LastName>Second</LastName>
            <AffiliationInfo><Affiliation>Novo Nordisk Pharma. second@novo.example</Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    let record = extract_single(xml);

    assert_eq!(record.corresponding_author_email, "first@leiden.example");
    assert_eq!(record.non_academic_authors, "NoMail; Second");
}
