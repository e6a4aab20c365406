use crate::support::{exit_with_error, print_json_or_exit};
use serde_json::{Value, json};
use xke_kata::Exercise;

pub fn run(exercise: String, input: String, json_output: bool) {
    let exercise: Exercise = exercise.parse().unwrap_or_else(|err| exit_with_error(err));
    let input: Value = serde_json::from_str(&input)
        .unwrap_or_else(|err| exit_with_error(format!("input is not valid JSON: {err}")));

    let output = exercise
        .evaluate(&input)
        .unwrap_or_else(|err| exit_with_error(err));

    if json_output {
        let payload = json!({
            "exercise": exercise.name(),
            "input": input,
            "output": output,
        });
        print_json_or_exit(&payload, "run");
    } else {
        println!("{output}");
    }
}
