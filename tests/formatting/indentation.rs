use hdevelop::formatting::{Formatter, Indentation};

fn format(lines: &[&str]) -> Vec<String> {
    Formatter::from_settings(&Indentation::default()).format_lines(lines)
}

#[test]
fn if_else_endif() {
    assert_eq!(
        format(&["if (a)", "x := 1", "else", "x := 2", "endif"]),
        vec!["if (a)", "    x := 1", "else", "    x := 2", "endif"]
    );
}

#[test]
fn try_catch_endtry() {
    assert_eq!(
        format(&["try", "  read_image (Image, 'a')", "catch (E)", "  x := E", "  endtry"]),
        vec!["try", "    read_image (Image, 'a')", "catch (E)", "    x := E", "endtry"]
    );
}

#[test]
fn nested_loops() {
    assert_eq!(
        format(&[
            "for i := 0 to 9 by 1",
            "for j := 0 to 9 by 1",
            "if (i == j)",
            "continue",
            "endif",
            "endfor",
            "endfor",
        ]),
        vec![
            "for i := 0 to 9 by 1",
            "    for j := 0 to 9 by 1",
            "        if (i == j)",
            "            continue",
            "        endif",
            "    endfor",
            "endfor",
        ]
    );
}

#[test]
fn existing_indentation_is_discarded() {
    assert_eq!(
        format(&["\t\t  x := 1", "        * note", "   while (x < 3)", "x := x + 1", "\tendwhile"]),
        vec!["x := 1", "* note", "while (x < 3)", "    x := x + 1", "endwhile"]
    );
}

#[test]
fn unterminated_blocks() {
    assert_eq!(
        format(&["if (a)", "if (b)", "x := 1"]),
        vec!["if (a)", "    if (b)", "        x := 1"]
    );
}

#[test]
fn tabs_and_widths() {
    let text = "while (1)\nif (a)\nbreak\nendif\nendwhile";

    let tabs = Formatter::from_settings(&Indentation {
        tab_size: 2,
        insert_spaces: false,
    });
    assert_eq!(
        tabs.format_text(text),
        "while (1)\n\tif (a)\n\t\tbreak\n\tendif\nendwhile"
    );

    let narrow = Formatter::from_settings(&Indentation {
        tab_size: 2,
        insert_spaces: true,
    });
    assert_eq!(
        narrow.format_text(text),
        "while (1)\n  if (a)\n    break\n  endif\nendwhile"
    );
}

#[test]
fn reformatting_is_stable() {
    let formatter = Formatter::new("    ");
    let once = formatter.format_text("try\nif (a)\nx := 1\nelseif (b)\n\nx := 2\nendif\ncatch (E)\nendtry");
    assert_eq!(formatter.format_text(&once), once);
}
