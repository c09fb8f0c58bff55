use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use timetable_studio::{
    encode, normalize_value, project, render_html_table, RawConfig, RowKey,
};

const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

fn session(rng: &mut StdRng, n: usize) -> Value {
    json!({
        "subject": format!("S{}", n),
        "teacher": format!("Teacher{}", rng.gen_range(1..=8)),
        "room": rng.gen_range(1..=5),
        "time": format!("{}:00 - {}:00", 8 + n % 7, 9 + n % 7),
    })
}

/// Builds a division-tree response and returns it with the number of
/// sessions it lists.
fn division_tree(seed: u64) -> (Value, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut total = 0;
    let mut top = Map::new();

    for d in 1..=rng.gen_range(1..=3) {
        let mut theory = Map::new();
        let mut practical = Map::new();
        for day in DAYS.iter().take(rng.gen_range(1..=5)) {
            let sessions: Vec<Value> = (0..rng.gen_range(0..=4))
                .map(|_| {
                    total += 1;
                    session(&mut rng, total)
                })
                .collect();
            theory.insert(day.to_string(), Value::Array(sessions));

            let mut entries = Vec::new();
            for batch in ["K4", "L4", "M4"].iter().take(rng.gen_range(0..=3)) {
                let labs: Vec<Value> = (0..rng.gen_range(0..=2))
                    .map(|_| {
                        total += 1;
                        session(&mut rng, total)
                    })
                    .collect();
                let mut entry = Map::new();
                entry.insert(batch.to_string(), Value::Array(labs));
                entries.push(Value::Object(entry));
            }
            practical.insert(day.to_string(), Value::Array(entries));
        }
        top.insert(format!("Division-{}", d), json!({ "theory": theory, "practical": practical }));
    }
    (Value::Object(top), total)
}

#[test]
fn division_trees_lose_no_sessions() {
    for seed in 0..50 {
        let (raw, expected) = division_tree(seed);
        let grid = normalize_value(&raw).unwrap();
        assert_eq!(grid.session_count(), expected, "seed {seed}");
        assert_eq!(grid.skipped(), 0, "seed {seed}");
    }
}

#[test]
fn normalization_is_byte_for_byte_deterministic() {
    let (raw, _) = division_tree(7);
    let a = normalize_value(&raw).unwrap().to_json_pretty().unwrap();
    let b = normalize_value(&raw).unwrap().to_json_pretty().unwrap();
    assert_eq!(a, b);
}

#[test]
fn projection_is_idempotent() {
    let (raw, _) = division_tree(11);
    let grid = normalize_value(&raw).unwrap();
    let days = ["Monday", "Wednesday"];
    assert_eq!(project(&grid, &days), project(&grid, &days));
    assert_eq!(
        render_html_table(&project(&grid, &days)),
        render_html_table(&project(&grid, &days))
    );
}

#[test]
fn changing_days_only_changes_columns() {
    let (raw, _) = division_tree(3);
    let grid = normalize_value(&raw).unwrap();
    let snapshot = grid.clone();

    let wide = project(&grid, &DAYS);
    let narrow = project(&grid, &["Friday", "Saturday"]);

    assert_eq!(grid, snapshot);
    assert_eq!(wide.rows.len(), narrow.rows.len());
    assert_eq!(narrow.header, vec!["Friday", "Saturday"]);
    assert!(narrow.rows.iter().all(|r| r.cells.len() == 2 && r.cells[1].is_empty()));
    for (w, n) in wide.rows.iter().zip(&narrow.rows) {
        assert_eq!(w.label, n.label);
        assert_eq!(w.cells[4], n.cells[0]);
    }
}

#[test]
fn one_bad_practical_entry_does_not_hide_the_rest() {
    let raw = json!({
        "Division-1": {
            "theory": { "Monday": [{ "subject": "CNS", "teacher": "T1", "room": 1, "time": "8:00 - 9:00" }] },
            "practical": { "Monday": [
                {},
                { "K4": [{ "subject": "LP1", "teacher": "T2", "room": 2, "time": "9:00 - 11:00" }] }
            ] }
        }
    });

    let grid = normalize_value(&raw).unwrap();
    assert_eq!(grid.session_count(), 2);
    assert_eq!(grid.skipped(), 1);
}

#[test]
fn configured_form_with_one_monday_session() {
    let mut form = RawConfig::default();
    form.divisions = "2".into();
    form.batches = "K4,L4".into();
    form.theory_rooms = "3".into();
    form.lab_rooms = "2".into();
    form.days = "Monday,Tuesday".into();
    let request = encode(&form);

    let raw = json!({
        "1": {
            "theory": { "Monday": [{ "subject": "CNS", "teacher": "T1", "room": "R1", "time": "8:00 - 9:00" }] },
            "practical": {}
        }
    });
    let grid = normalize_value(&raw).unwrap();

    assert_eq!(grid.rows(), &[RowKey::division_day("1", "Monday")]);
    let p = project(&grid, request.days.as_slice());
    assert_eq!(p.rows[0].cells[0], vec!["CNS (T1) - R1".to_owned()]);
    assert!(p.rows[0].cells[1].is_empty());
}

#[test]
fn time_grid_scenario() {
    let raw = json!({ "09:00": { "Monday": [{ "subject": "CNS", "teacher": "T1", "room": "R1", "time": "09:00" }] } });
    let grid = normalize_value(&raw).unwrap();
    let p = project(&grid, &DAYS);

    assert_eq!(p.rows.len(), 1);
    assert_eq!(p.rows[0].label, "09:00");
    assert_eq!(p.rows[0].cells[0], vec!["CNS (T1) - R1".to_owned()]);
    assert!(p.rows[0].cells[1..].iter().all(Vec::is_empty));
}

#[test]
fn re_encoding_an_unchanged_form_is_identical() {
    let form = RawConfig::default();
    assert_eq!(encode(&form), encode(&form.clone()));
    assert_eq!(encode(&form).to_json().unwrap(), encode(&form).to_json().unwrap());
}
