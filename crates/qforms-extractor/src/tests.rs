//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        vocabulary_from_yaml, CodaGrammar, ExtractionMode, Extractor, ExtractorConfig,
        ExtractorError, MalformedLinePolicy, OverlapPolicy,
    };
    use qforms_domain::{Marker, QuotativeSubtype, Vocabulary};

    const HEADER: &str = "Line\tSpkr\tStTime\tContent\tEnTime";

    const VOCABULARY: &str = r#"
pron: [I, you, she, he, we, they, it]
copula: [was, is, were, are]
contracted_copula: [she's, he's, I'm, they're, it's, we're]
intj: [oh, man, well]
q_go: [go, goes, went]
q_say: [say, says, said]
q_tell: [tell, told]
q_think: [think, thought]
"#;

    fn vocabulary() -> Vocabulary {
        vocabulary_from_yaml(VOCABULARY).unwrap()
    }

    fn extractor(config: ExtractorConfig) -> Extractor {
        Extractor::new(&vocabulary(), config).unwrap()
    }

    fn row(utterance_id: usize, speaker_id: &str, content: &str) -> String {
        format!("{}\t{}\t0.0\t{}\t1.0", utterance_id, speaker_id, content)
    }

    fn transcript(rows: &[String]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    fn subtypes(extractor: &Extractor, content: &str) -> Vec<String> {
        extractor
            .scan(content)
            .iter()
            .map(|m| m.subtype.name())
            .collect()
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_case() {
        let extractor = extractor(ExtractorConfig::default());

        let upper = extractor.scan("SHE WAS LIKE, stop");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].subtype, QuotativeSubtype::CopulaAttached(Marker::Like));
        assert_eq!(upper[0].form, "WAS LIKE");

        let lower = extractor.scan("she was like, stop");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].form, "was like");
    }

    #[test]
    fn test_coda_is_required() {
        let extractor = extractor(ExtractorConfig::default());
        assert!(extractor.scan("she was like").is_empty());
        assert!(extractor.scan("she was like that").is_empty());
        assert_eq!(subtypes(&extractor, "she was like oh my god"), ["q_like_copula"]);
        assert_eq!(subtypes(&extractor, "she was like [laugh] no"), ["q_like_copula"]);
    }

    #[test]
    fn test_zero_copula_gated_by_copula_only() {
        let mut config = ExtractorConfig::default();
        config.patterns.coda = CodaGrammar::ClauseFinal;

        let found = extractor(config.clone()).scan("and he all pissed off,");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtype, QuotativeSubtype::ZeroCopula(Marker::All));
        assert_eq!(found[0].form, "all");

        config.patterns.copula_only = true;
        assert!(extractor(config).scan("and he all pissed off,").is_empty());
    }

    #[test]
    fn test_zero_copula_needs_clause_final_for_predicate() {
        let extractor = extractor(ExtractorConfig::default());
        assert!(extractor.scan("and he all pissed off,").is_empty());
        assert_eq!(subtypes(&extractor, "and he all, forget it"), ["q_all_zero"]);
    }

    #[test]
    fn test_tell_object_filter() {
        let extractor = extractor(ExtractorConfig::default());

        assert!(extractor.scan("she tell you the truth,").is_empty());

        let found = extractor.scan("she tell him the truth,");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtype.name(), "q_tell");
        assert_eq!(found[0].form, "tell");
        assert_eq!(found[0].object.as_deref(), Some("him"));
    }

    #[test]
    fn test_idiom_is_not_a_quotative() {
        let extractor = extractor(ExtractorConfig::default());
        assert!(extractor.scan("like I said, it was fine").is_empty());
        assert!(extractor.scan("as I said, it was fine").is_empty());
        assert_eq!(subtypes(&extractor, "I said, it was fine"), ["q_say"]);
    }

    #[test]
    fn test_connectives_only_vetoed_with_any_subject() {
        let mut config = ExtractorConfig::default();
        config.patterns.any_subject = true;
        let any_subject = extractor(config);

        assert_eq!(subtypes(&any_subject, "my mom was like, no"), ["q_like_copula"]);
        assert!(any_subject.scan("and was like, no").is_empty());
        assert_eq!(subtypes(&any_subject, "and she was like, no"), ["q_like_copula"]);

        let pronoun = extractor(ExtractorConfig::default());
        assert!(pronoun.scan("my mom was like, no").is_empty());
    }

    #[test]
    fn test_discourse_like_before_pronoun_subject() {
        let extractor = extractor(ExtractorConfig::default());

        assert_eq!(subtypes(&extractor, "and like she was like, no way"), ["q_like_copula"]);
        assert_eq!(subtypes(&extractor, "like I'm like, whatever"), ["q_like_contracted"]);
        assert_eq!(subtypes(&extractor, "as she was like, no"), ["q_like_copula"]);
        assert_eq!(subtypes(&extractor, "and like he goes, stop"), ["q_go"]);
        assert_eq!(subtypes(&extractor, "what he goes, stop"), ["q_go"]);
    }

    #[test]
    fn test_left_context_per_family_with_pronoun_subjects() {
        let extractor = extractor(ExtractorConfig::default());
        let cases: &[(&str, &[&str])] = &[
            ("like I said, no", &[]),
            ("what she said, no", &[]),
            ("like he goes, stop", &["q_go"]),
            ("like she was like, no", &["q_like_copula"]),
            ("like she's like, no", &["q_like_contracted"]),
            ("like she all, no", &["q_all_zero"]),
            ("so I said, no", &["q_say"]),
            ("and he goes, stop", &["q_go"]),
            ("and she was like, no", &["q_like_copula"]),
            ("and she's like, no", &["q_like_contracted"]),
            ("and he all, forget it", &["q_all_zero"]),
        ];

        for (content, expected) in cases {
            assert_eq!(subtypes(&extractor, content), *expected, "{}", content);
        }
    }

    #[test]
    fn test_left_context_per_family_with_any_subject() {
        let mut config = ExtractorConfig::default();
        config.patterns.any_subject = true;
        let extractor = extractor(config);
        let cases: &[(&str, &[&str])] = &[
            ("like I said, no", &[]),
            ("my mom said, no", &["q_say"]),
            ("like he goes, stop", &["q_go"]),
            ("like she was like, no", &["q_like_copula"]),
            ("like I'm like, whatever", &["q_like_contracted"]),
            ("and said, no", &[]),
            ("and goes, stop", &[]),
            ("and was like, no", &[]),
            ("but was all, no", &[]),
            ("and she's like, what", &["q_like_contracted"]),
            ("and he all, forget it", &["q_all_zero"]),
        ];

        for (content, expected) in cases {
            assert_eq!(subtypes(&extractor, content), *expected, "{}", content);
        }
    }

    #[test]
    fn test_no_dedup_and_registry_order() {
        let extractor = extractor(ExtractorConfig::default());

        let found = extractor.scan("she said, then she was like, no");
        let names: Vec<_> = found.iter().map(|m| m.subtype.name()).collect();
        assert_eq!(names, ["q_like_copula", "q_say"]);
    }

    #[test]
    fn test_multiple_matches_of_one_subtype() {
        let extractor = extractor(ExtractorConfig::default());

        let found = extractor.scan("he goes, no and she went, yes");
        let forms: Vec<_> = found.iter().map(|m| m.form.as_str()).collect();
        assert_eq!(forms, ["goes", "went"]);
        assert!(found[0].start < found[1].start);
    }

    #[test]
    fn test_contracted_copula_has_no_subject() {
        let extractor = extractor(ExtractorConfig::default());
        let found = extractor.scan("and she's like, what");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtype.name(), "q_like_contracted");
        assert_eq!(found[0].form, "she's like");
    }

    #[test]
    fn test_process_transcript_stats_and_results() {
        let extractor = extractor(ExtractorConfig::default());
        let text = transcript(&[
            row(1, "ATL_se0_1", "she was like, no way"),
            row(2, "ATL_int_01", "well [he goes, stop] okay"),
            row(3, "ATL_int_01", "she said, fine"),
            String::new(),
            row(4, "Misc", "(pause)"),
            "5\tATL_se0_1\t4.0\tbroken line".to_string(),
            row(6, "ATL_se0_1", "nothing here"),
        ]);

        let extraction = extractor.process_transcript("ATL_se0_1_1234", &text).unwrap();
        assert_eq!(extraction.region_id, "ATL");

        let stats = extraction.stats;
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.speaker_lines, 2);
        assert_eq!(stats.interviewer_lines, 3);
        assert_eq!(stats.overlap_lines, 1);
        assert_eq!(stats.skipped_lines, 2);
        assert_eq!(stats.malformed_lines, 1);
        assert_eq!(stats.matched_lines, 2);
        assert_eq!(stats.examined_lines(), 3);

        assert_eq!(extraction.results.len(), 2);

        let first = &extraction.results[0];
        assert_eq!(first.source_id, "ATL_se0_1_1234");
        assert_eq!(first.speaker_id, "ATL_se0_1");
        assert_eq!(first.utterance_id, "1");
        assert_eq!(first.region_id, "ATL");
        assert_eq!(first.subtype.name(), "q_like_copula");
        assert_eq!(first.target, "was like");

        let overlap = &extraction.results[1];
        assert_eq!(overlap.speaker_id, "ATL_int_01");
        assert_eq!(overlap.utterance, "he goes, stop");
        assert_eq!(overlap.target, "goes");
    }

    #[test]
    fn test_overlap_policies() {
        let text = transcript(&[row(1, "DCA_int_02", "she said, fine")]);

        let skip = extractor(ExtractorConfig::default());
        assert!(skip.process_transcript("DCA_se1", &text).unwrap().results.is_empty());

        let mut config = ExtractorConfig::default();
        config.transcript.overlap = OverlapPolicy::KeepContent;
        let keep = extractor(config);
        let results = keep.process_transcript("DCA_se1", &text).unwrap().results;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].region_id, "DCA");

        let bracketed = transcript(&[row(1, "DCA_int_02", "[she said, fine]")]);
        let mut config = ExtractorConfig::default();
        config.transcript.overlap = OverlapPolicy::IgnoreInterviewer;
        let ignore = extractor(config);
        let extraction = ignore.process_transcript("DCA_se1", &bracketed).unwrap();
        assert!(extraction.results.is_empty());
        assert_eq!(extraction.stats.overlap_lines, 0);
    }

    #[test]
    fn test_malformed_line_abort() {
        let mut config = ExtractorConfig::default();
        config.transcript.malformed = MalformedLinePolicy::Abort;
        let extractor = extractor(config);

        let text = transcript(&[row(1, "ATL_se0_1", "fine"), "2\tATL_se0_1\toops".to_string()]);
        let err = extractor.process_transcript("ATL_se0_1", &text).unwrap_err();
        assert!(matches!(err, ExtractorError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn test_header_only_transcript() {
        let extractor = extractor(ExtractorConfig::default());
        let extraction = extractor.process_transcript("PRV_se0", HEADER).unwrap();
        assert!(extraction.results.is_empty());
        assert_eq!(extraction.stats.total_lines, 0);
    }

    #[test]
    fn test_processing_is_deterministic() {
        let extractor = extractor(ExtractorConfig::permissive());
        let text = transcript(&[
            row(1, "ATL_se0_1", "he was like, no and she goes, yes"),
            row(2, "ATL_se0_1", "my brother told me something, oh"),
        ]);

        let first = extractor.process_transcript("ATL_se0_1", &text).unwrap();
        let second = extractor.process_transcript("ATL_se0_1", &text).unwrap();
        assert_eq!(first.results, second.results);
        assert!(!first.results.is_empty());
    }

    #[test]
    fn test_copula_mode_extraction() {
        let mut config = ExtractorConfig::default();
        config.patterns.mode = ExtractionMode::Copula;
        let extractor = extractor(config);

        let found = extractor.scan("she was here and it's fine");
        let names: Vec<_> = found.iter().map(|m| m.subtype.name()).collect();
        assert_eq!(names, ["contracted", "copula"]);
        assert_eq!(found[0].form, "it's");
        assert_eq!(found[1].form, "was");
    }
}
