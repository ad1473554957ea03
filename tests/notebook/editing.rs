use std::fs;

use hdevelop::formatting::Indentation;
use hdevelop::language::GroupKind;
use hdevelop::notebook::{self, NotebookError};

fn sample(name: &str) -> Vec<u8> {
    fs::read(format!("tests/samples/{}", name)).expect("Failed to read sample")
}

#[test]
fn cells_follow_settings() {
    let content = sample("measure_regions.hdvp");

    let tabs = Indentation {
        tab_size: 4,
        insert_spaces: false,
    };
    let document = notebook::open(&content, &tabs).unwrap();

    let lines: Vec<&str> = document
        .cells
        .code
        .split('\n')
        .collect();
    assert_eq!(lines[0], "Areas := []");
    assert_eq!(lines[2], "");
    assert!(lines.contains(&"\tselect_obj (Regions, Region, Index)"));
    assert!(lines.contains(&"\t\t\tArea := Area * 2"));
    assert!(lines.contains(&"\tcatch (Exception)"));
    assert!(lines.contains(&"endfor"));

    assert_eq!(document.cells.output_controls, "ctrl Areas[1]\nctrl Error");
}

#[test]
fn adding_parameters() {
    let mut document = notebook::open(&sample("empty.hdvp"), &Indentation::default()).unwrap();

    document.cells.input_objects = "iconic Image\n".to_string();
    document.cells.input_controls = "  ctrl   Width \nctrl Sizes [3]".to_string();
    document.cells.code = "* measure\nget_image_size (Image, Width, Height)\nreturn ()".to_string();

    let saved = String::from_utf8(
        document
            .save()
            .unwrap(),
    )
    .unwrap();

    assert!(saved.contains(
        "<io>\n<par name=\"Image\" base_type=\"iconic\" dimension=\"0\"/>\n</io>\n<oo/>\n<ic>\n<par name=\"Width\" base_type=\"ctrl\" dimension=\"0\"/>\n<par name=\"Sizes\" base_type=\"ctrl\" dimension=\"3\"/>\n</ic>\n<oc/>"
    ));
    assert!(saved.contains("<body>\n<c>* measure</c>\n<l>get_image_size (Image, Width, Height)</l>\n<l>return ()</l>\n</body>"));
    assert!(saved.contains("<docu id=\"empty\">\n<parameters>\n<parameter id=\"Image\"/>\n<parameter id=\"Sizes\"/>\n<parameter id=\"Width\"/>\n</parameters>\n</docu>"));

    let reopened = notebook::open(saved.as_bytes(), &Indentation::default()).unwrap();
    assert_eq!(reopened.cells.input_controls, "ctrl Width\nctrl Sizes[3]");
}

#[test]
fn code_is_stored_as_typed() {
    let mut document = notebook::open(&sample("empty.hdvp"), &Indentation::default()).unwrap();
    document.cells.code = "if (a)\nx := 1\n  * aside\n\nendif".to_string();

    let saved = String::from_utf8(
        document
            .save()
            .unwrap(),
    )
    .unwrap();

    assert!(saved.contains(
        "<body>\n<l>if (a)</l>\n<l>x := 1</l>\n<l>  * aside</l>\n<c/>\n<l>endif</l>\n</body>"
    ));
}

#[test]
fn rejecting_invalid_parameters() {
    let original = sample("count_blobs.hdvp");
    let mut document = notebook::open(&original, &Indentation::default()).unwrap();

    document.cells.input_objects = "iconic Image\nimage Other".to_string();
    document.cells.code = String::new();

    match document.save() {
        Err(NotebookError::Format(kind, error)) => {
            assert_eq!(kind, GroupKind::InputObjects);
            assert_eq!(error.line, "image Other");
            assert_eq!(
                error.to_string(),
                "Cannot save file: invalid parameter format at 'image Other'"
            );
        }
        other => panic!("Expected a format error, got {:?}", other),
    }

    // nothing was applied, so fixing the cell saves the original body
    document.cells.input_objects = "iconic Image".to_string();
    document.cells.code = "threshold (Image, Region, Range[0], Range[1])".to_string();
    let saved = String::from_utf8(
        document
            .save()
            .unwrap(),
    )
    .unwrap();
    assert!(saved.contains("<body>\n<l>threshold (Image, Region, Range[0], Range[1])</l>\n</body>"));
}

#[test]
fn duplicate_names_are_documented_twice() {
    let mut document = notebook::open(&sample("empty.hdvp"), &Indentation::default()).unwrap();
    document.cells.input_controls = "ctrl Value".to_string();
    document.cells.output_controls = "ctrl Value".to_string();

    let saved = String::from_utf8(
        document
            .save()
            .unwrap(),
    )
    .unwrap();
    assert!(saved.contains("<parameters>\n<parameter id=\"Value\"/>\n<parameter id=\"Value\"/>\n</parameters>"));
}

#[test]
fn untouched_parts_survive() {
    let input = r#"<?xml version="0.9" encoding="UTF-8" standalone="yes"?>
<!-- exported -->
<hdevelop file_version="1.2" halcon_version="22.11.0.0">
<procedure name="keep" extra="yes">
<interface>
<ic>
<par name="A" base_type="ctrl" dimension="0"/>
</ic>
</interface>
<body>
<l>B := A</l>
</body>
<docu id="keep">
<short lang="en_US">Keeps things.</short>
</docu>
<?generator hand?>
</procedure>
<library/>
</hdevelop>
"#;

    let mut document = notebook::open(input.as_bytes(), &Indentation::default()).unwrap();
    assert_eq!(
        document
            .base()
            .name()
            .as_deref(),
        Some("keep")
    );

    let saved = String::from_utf8(
        document
            .save()
            .unwrap(),
    )
    .unwrap();

    assert!(saved.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<!-- exported -->\n<hdevelop"
    ));
    assert!(saved.contains("<procedure name=\"keep\" extra=\"yes\">"));
    assert!(saved.contains("<docu id=\"keep\">\n<parameters>\n<parameter id=\"A\"/>\n</parameters>\n</docu>\n<?generator hand?>\n</procedure>\n<library/>\n</hdevelop>\n"));
    assert!(!saved.contains("Keeps things."));
}
