use std::fs;

use descalc::calculate;
use walkdir::WalkDir;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path()
                                                 .extension()
                                                 .is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (input, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            count += 1;
            run_case(input.trim(), expected.trim(), &format!("{}:{}", path.display(), i + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn run_case(input: &str, expected: &str, location: &str) {
    let result = calculate(input);

    if let Some(kind) = expected.strip_prefix("error ") {
        match result {
            Ok(n) => panic!("{location}: {input:?} gave {n}, expected a {kind} error"),
            Err(e) => assert_eq!(e.kind().to_string(), kind, "{location}: {input:?} gave {e}"),
        }
        return;
    }

    let (value, class) = expected.split_once(' ')
                                 .unwrap_or_else(|| panic!("{location}: malformed expectation"));
    let n = result.unwrap_or_else(|e| panic!("{location}: {input:?} failed: {e}"));

    if value == "NaN" {
        assert!(n.value.is_nan(), "{location}: {input:?} gave {n}, expected NaN");
    } else {
        let value: f64 = value.parse()
                              .unwrap_or_else(|_| panic!("{location}: bad value {value:?}"));
        assert!((n.value - value).abs() < 1e-9,
                "{location}: {input:?} gave {}, expected {value}",
                n.value);
    }
    assert_eq!(n.is_integer, class == "int", "{location}: {input:?} classified as {n}");
}
