use sipcompare::markup::{clean_markdown, parse_sections, Line, Section, Tone};

#[test]
fn pipe_line_becomes_a_table_with_matching_headers() {
    let sections = parse_sections("Attribute | Beer | Rum\nType | Lager | Dark");
    assert_eq!(sections.len(), 1);
    match &sections[0] {
        Section::Table { headers, rows } => {
            assert_eq!(headers, &["Attribute", "Beer", "Rum"]);
            assert_eq!(rows, &[vec!["Type", "Lager", "Dark"]]);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn titled_block_becomes_notes_with_tone_and_bullets() {
    let sections = parse_sections("KEY STRENGTHS:\n- crisp\n- smooth\nno dash here");
    assert_eq!(sections.len(), 1);
    match &sections[0] {
        Section::Notes { title, tone, lines } => {
            assert_eq!(title, "KEY STRENGTHS:");
            assert_eq!(*tone, Tone::Positive);
            assert_eq!(
                lines,
                &[
                    Line {
                        text: "crisp".to_string(),
                        bullet: true
                    },
                    Line {
                        text: "smooth".to_string(),
                        bullet: true
                    },
                    Line {
                        text: "no dash here".to_string(),
                        bullet: false
                    },
                ]
            );
        }
        other => panic!("expected notes, got {other:?}"),
    }
}

#[test]
fn full_reply_splits_into_table_and_tone_colored_blocks() {
    let reply = "Attribute | A | B\nPrice (750ml) | ₹120 | ₹800\n\n\
                 WEAKNESSES:\n- A: bland\n\n\
                 OVERALL WINNER & RECOMMENDATIONS:\nB, easily.";
    let sections = parse_sections(reply);
    assert_eq!(sections.len(), 3);
    assert!(matches!(sections[0], Section::Table { .. }));
    assert!(matches!(
        sections[1],
        Section::Notes {
            tone: Tone::Negative,
            ..
        }
    ));
    assert!(matches!(
        sections[2],
        Section::Notes {
            tone: Tone::Verdict,
            ..
        }
    ));
}

#[test]
fn markdown_style_tables_lose_edge_pipes_and_separator_rows() {
    let reply = "| Attribute | A | B |\n| --- | --- | --- |\n| Type | Stout | IPA |";
    let sections = parse_sections(reply);
    match &sections[0] {
        Section::Table { headers, rows } => {
            assert_eq!(headers, &["Attribute", "A", "B"]);
            assert_eq!(rows, &[vec!["Type", "Stout", "IPA"]]);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn blank_sections_and_blank_rows_are_skipped() {
    let sections = parse_sections("A | B\n\n   \n\nNotes\nline");
    assert_eq!(sections.len(), 2);

    let sections = parse_sections("A | B\n\nrow-free table follows\n\nH1 | H2\n   \n");
    match sections.last().unwrap() {
        Section::Table { headers, rows } => {
            assert_eq!(headers, &["H1", "H2"]);
            assert!(rows.is_empty());
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn windows_line_endings_are_tolerated() {
    let sections = parse_sections("A | B\r\nC | D\r\n\r\nNotes\r\n- one");
    assert_eq!(sections.len(), 2);
    assert!(matches!(sections[0], Section::Table { .. }));
    assert!(matches!(sections[1], Section::Notes { .. }));
}

#[test]
fn clean_markdown_strips_emphasis_markers() {
    assert_eq!(
        clean_markdown("**Old Monk** is *smooth*"),
        "Old Monk is smooth"
    );
    assert_eq!(clean_markdown("no markers"), "no markers");
}
