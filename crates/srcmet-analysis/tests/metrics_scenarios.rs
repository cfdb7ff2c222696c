//! End-to-end scenarios over the full metric pipeline.

use srcmet_analysis::{analyze, halstead_response, maintainability_response};

// ── empty and trivia-only payloads ──────────────────────────────────

#[test]
fn empty_input_yields_the_documented_floor_values() {
    let result = analyze("");
    assert_eq!(result.total_lines, 0);
    assert_eq!(result.maintainability.cyclomatic_complexity, 1);
    assert_eq!(result.maintainability.lines_of_code, 0);
    assert_eq!(result.loop_depth, 0);
    assert_eq!(result.halstead.vocabulary, 0);
    assert_eq!(result.halstead.length, 0);
    assert_eq!(result.halstead.volume, 0.0);
    assert_eq!(result.halstead.difficulty, 0.0);
    assert_eq!(result.halstead.effort, 0.0);
    assert_eq!(result.line_counts.code_lines, 0);
    assert_eq!(result.line_counts.comment_lines, 0);
    assert_eq!(result.line_counts.blank_lines, 0);
    assert_eq!(result.line_counts.function_count, 0);
    // Both logarithm terms drop; only the cyclomatic term remains, and the
    // score clamps to the top of the presentational range.
    assert_eq!(result.maintainability.index, 100.0);
}

#[test]
fn comment_only_input() {
    let result = analyze("// just a comment");
    assert_eq!(result.line_counts.comment_lines, 1);
    assert_eq!(result.line_counts.code_lines, 0);
    assert_eq!(result.maintainability.cyclomatic_complexity, 1);
    assert_eq!(result.halstead.vocabulary, 0);
    assert_eq!(result.halstead.volume, 0.0);
}

#[test]
fn whitespace_only_input_has_zero_vocabulary() {
    let result = analyze("   \n\t\n  ");
    assert_eq!(result.halstead.vocabulary, 0);
    assert_eq!(result.halstead.volume, 0.0);
    assert_eq!(result.line_counts.blank_lines, result.total_lines);
}

// ── documented metric scenarios ─────────────────────────────────────

#[test]
fn triple_nested_loops_have_depth_three() {
    let result = analyze("for(a){for(b){for(c){}}}");
    assert_eq!(result.loop_depth, 3);
}

#[test]
fn one_if_one_and_one_for_gives_complexity_four() {
    let source = "if (a && b) {\n    for (i = 0; i < n; i++) { f(); }\n}";
    let result = analyze(source);
    assert_eq!(result.maintainability.cyclomatic_complexity, 4);
}

#[test]
fn adding_an_if_raises_complexity_by_one_and_leaves_loop_depth_alone() {
    let before = analyze("int f() {\n    for (i = 0; i < n; i++) { g(); }\n}");
    let after = analyze("int f() {\n    if (armed) { h(); }\n    for (i = 0; i < n; i++) { g(); }\n}");
    assert_eq!(
        after.maintainability.cyclomatic_complexity,
        before.maintainability.cyclomatic_complexity + 1
    );
    assert_eq!(after.loop_depth, before.loop_depth);
}

// ── structural invariants ───────────────────────────────────────────

#[test]
fn line_classes_partition_the_physical_lines() {
    let source = "int main() {\n\n    // setup\n    int x = 0; // init\n    /* block\n       comment */\n    return x;\n}\n";
    let result = analyze(source);
    assert_eq!(
        result.line_counts.code_lines
            + result.line_counts.comment_lines
            + result.line_counts.blank_lines,
        result.total_lines
    );
}

#[test]
fn analysis_is_idempotent() {
    let source = "while (a) { if (b && c) { f(\"x\"); } }\n// tail\n";
    assert_eq!(analyze(source), analyze(source));
}

#[test]
fn malformed_input_still_produces_a_complete_result() {
    let source = "int broken( { \"unterminated\n/* never closed";
    let result = analyze(source);
    assert!(result.maintainability.cyclomatic_complexity >= 1);
    assert!(result.maintainability.index.is_finite());
    assert_eq!(
        result.line_counts.code_lines
            + result.line_counts.comment_lines
            + result.line_counts.blank_lines,
        result.total_lines
    );
}

// ── response shapes ─────────────────────────────────────────────────

#[test]
fn compat_response_shapes_serialize_as_the_wire_contract() {
    let result = analyze("int add(int a, int b) { return a + b; }");

    let triple = serde_json::to_value(maintainability_response(&result)).unwrap();
    assert!(triple.is_array());
    assert_eq!(triple.as_array().unwrap().len(), 3);

    let halstead = serde_json::to_value(halstead_response(&result.halstead)).unwrap();
    let mut keys: Vec<&str> = halstead
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["difficulty", "effort", "length", "vocabulary", "volume"]
    );

    let lines = serde_json::to_value(result.line_counts).unwrap();
    let mut keys: Vec<&str> = lines
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["blankLines", "codeLines", "commentLines", "functionCount"]
    );
}
