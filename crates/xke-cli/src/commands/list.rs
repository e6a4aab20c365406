use crate::support::print_json_or_exit;
use serde_json::json;
use xke_kata::Exercise;

pub fn run(json_output: bool) {
    if json_output {
        let exercises: Vec<_> = Exercise::ALL
            .iter()
            .map(|exercise| json!({ "name": exercise.name(), "lesson": exercise.lesson() }))
            .collect();
        print_json_or_exit(&json!({ "exercises": exercises }), "exercise list");
    } else {
        println!("xke list");
        for exercise in Exercise::ALL {
            println!("  {:<24}{}", exercise.name(), exercise.lesson());
        }
    }
}
