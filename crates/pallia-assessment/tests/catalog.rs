use std::collections::HashSet;

use pallia_assessment::catalog::AnswerDomain;
use pallia_assessment::questionnaire;

#[test]
fn seven_sections_with_expected_item_counts() {
    let q = questionnaire();
    let counts: Vec<usize> = q.sections().iter().map(|s| s.items.len()).collect();
    assert_eq!(counts, vec![6, 7, 16, 6, 8, 6, 4]);
    assert_eq!(q.question_count(), 53);
}

#[test]
fn section_ids_run_one_through_seven_in_order() {
    let ids: Vec<u8> = questionnaire().sections().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn question_ids_unique_across_questionnaire() {
    let mut seen = HashSet::new();
    for section in questionnaire().sections() {
        for item in &section.items {
            assert!(
                seen.insert(item.id.clone()),
                "duplicate question id: {}",
                item.id
            );
        }
    }
}

#[test]
fn question_lookup_finds_every_item() {
    let q = questionnaire();
    for section in q.sections() {
        for item in &section.items {
            assert!(q.question(&item.id).is_some(), "missing: {}", item.id);
        }
    }
    assert!(q.question("zz9").is_none());
}

#[test]
fn condition_groups_partition_section_three() {
    let q = questionnaire();
    let section = q.section(3).unwrap();
    let groups = section.condition_groups();

    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Cancer",
            "Dementia/Frailty",
            "Neurological",
            "Heart/Vascular",
            "Respiratory",
            "Renal",
            "Liver",
        ]
    );

    let grouped: Vec<&str> = groups
        .iter()
        .flat_map(|g| &g.items)
        .map(|i| i.id.as_str())
        .collect();
    let flat: Vec<&str> = section.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(grouped, flat);
}

#[test]
fn renal_prefix_not_swallowed_by_respiratory() {
    let section = questionnaire().section(3).unwrap();
    let groups = section.condition_groups();

    let respiratory = groups.iter().find(|g| g.title == "Respiratory").unwrap();
    let renal = groups.iter().find(|g| g.title == "Renal").unwrap();

    let respiratory_ids: Vec<&str> = respiratory.items.iter().map(|i| i.id.as_str()).collect();
    let renal_ids: Vec<&str> = renal.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(respiratory_ids, vec!["r1", "r2"]);
    assert_eq!(renal_ids, vec!["re1", "re2"]);
}

#[test]
fn grouped_labels_strip_category_prefix() {
    let section = questionnaire().section(3).unwrap();

    // Flat labels carry the category prefix so the list reads standalone.
    assert!(section.items.iter().any(|i| i.label.starts_with("Cancer: ")));

    for group in section.condition_groups() {
        let prefix = format!("{}: ", group.title);
        for item in &group.items {
            assert!(
                !item.label.starts_with(&prefix),
                "label not stripped in group '{}': {}",
                group.title,
                item.label
            );
        }
    }
}

#[test]
fn non_grouped_section_yields_single_identity_group() {
    let section = questionnaire().section(1).unwrap();
    let groups = section.condition_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, section.title);
    assert_eq!(groups[0].items.len(), section.items.len());
}

#[test]
fn answer_domains_match_section_type() {
    let q = questionnaire();
    for id in [1u8, 2, 3, 4, 7] {
        for item in &q.section(id).unwrap().items {
            assert_eq!(item.domain, AnswerDomain::Ternary, "section {id}");
        }
    }
    for item in &q.section(5).unwrap().items {
        assert!(matches!(item.domain, AnswerDomain::Dropdown { .. }));
    }
    for item in &q.section(6).unwrap().items {
        assert_eq!(item.domain, AnswerDomain::Urgency);
    }
}

#[test]
fn positive_values_per_domain() {
    assert_eq!(AnswerDomain::Ternary.positive_value(), "yes");
    assert_eq!(AnswerDomain::Urgency.positive_value(), "immediate");
    let dropdown = AnswerDomain::Dropdown {
        options: vec!["Yes".to_string(), "No".to_string()],
    };
    assert_eq!(dropdown.positive_value(), "Yes");
}

#[test]
fn answer_domain_serializes_with_kind_tag() {
    let ternary = serde_json::to_value(&AnswerDomain::Ternary).unwrap();
    assert_eq!(ternary["kind"], "ternary");

    let dropdown = serde_json::to_value(&AnswerDomain::Dropdown {
        options: vec!["Yes".to_string(), "No".to_string()],
    })
    .unwrap();
    assert_eq!(dropdown["kind"], "dropdown");
    assert_eq!(dropdown["options"][0], "Yes");
}

#[test]
fn domain_membership() {
    assert!(AnswerDomain::Ternary.contains("unclear"));
    assert!(!AnswerDomain::Ternary.contains("Yes"));
    assert!(AnswerDomain::Urgency.contains("within-1-week"));
    assert!(!AnswerDomain::Urgency.contains("next month"));
}
