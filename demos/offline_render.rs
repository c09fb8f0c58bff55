use timetable_studio::{normalize_value, project, render_text_table};

// A response in the division-tree shape, as the scheduler sends it.
const DIVISION_TREE: &str = r#"{
  "Division-1": {
    "theory": {
      "Monday":  [
        { "subject": "CNS",  "teacher": "Teacher1", "room": 1, "time": "8:00 - 9:00" },
        { "subject": "TOC",  "teacher": "Teacher4", "room": 2, "time": "9:00 - 10:00" }
      ],
      "Tuesday": [
        { "subject": "SPOS", "teacher": "Teacher2", "room": 3, "time": "8:00 - 9:00" }
      ]
    },
    "practical": {
      "Monday":  [
        { "K4": [{ "subject": "DBMSL", "teacher": "Teacher5", "room": 1, "time": "8:00 - 10:00" }] },
        { "L4": [{ "subject": "LP1",   "teacher": "Teacher6", "room": 2, "time": "8:00 - 10:00" }] }
      ],
      "Tuesday": [
        { "K4": [{ "subject": "CNSL",  "teacher": "Teacher7", "room": 4, "time": "8:00 - 10:00" }] }
      ]
    }
  }
}"#;

// The same kind of data keyed by time slot.
const TIME_GRID: &str = r#"{
  "09:00": { "Monday": [{ "subject": "CNS", "teacher": "T1", "room": "R1", "time": "09:00" }] },
  "10:00": { "Tuesday": [{ "subject": "HCI", "teacher": "T3", "room": "R2", "time": "10:00" }] }
}"#;

fn main() {
    let days = ["Monday", "Tuesday", "Wednesday"];

    for (name, body) in [("division tree", DIVISION_TREE), ("time grid", TIME_GRID)] {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{name}: bad fixture: {e}");
                continue;
            }
        };
        match normalize_value(&value) {
            Ok(grid) => {
                println!("{name}: {} rows, {} sessions", grid.rows().len(), grid.session_count());
                print!("{}", render_text_table(&project(&grid, &days)));
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
        println!();
    }
}
