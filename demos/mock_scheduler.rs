//! A stand-in scheduler service for trying the studio without the real one.
//!
//! Listens on 127.0.0.1:5000 and answers `POST /generate-timetable` with a
//! randomly filled division-tree timetable. No conflict resolution beyond
//! not reusing a teacher or room within one day.
//!
//!     cargo run --example mock_scheduler
//!     cargo run --bin studio

use std::io::Read;

use rand::seq::SliceRandom;
use serde_json::{json, Map, Value};
use tiny_http::{Header, Method, Response, Server};

use timetable_studio::ScheduleRequest;

fn main() {
    let addr = "127.0.0.1:5000";
    let server = match Server::http(addr) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to bind {addr}: {e}");
            return;
        }
    };
    println!("mock scheduler on http://{addr}/generate-timetable");

    for mut request in server.incoming_requests() {
        if *request.method() != Method::Post || request.url() != "/generate-timetable" {
            let _ = request.respond(Response::from_string("not found").with_status_code(404));
            continue;
        }

        let mut body = String::new();
        let _ = request.as_reader().read_to_string(&mut body);

        let (status, reply) = match serde_json::from_str::<ScheduleRequest>(&body) {
            Ok(req) => generate(&req),
            Err(e) => (400, json!({ "error": format!("invalid request: {e}") })),
        };
        println!("{} -> {}", body.len(), status);

        let mut response = Response::from_string(reply.to_string()).with_status_code(status);
        if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
            response = response.with_header(h);
        }
        let _ = request.respond(response);
    }
}

fn generate(req: &ScheduleRequest) -> (u16, Value) {
    let counts = (
        req.divisions.as_count(),
        req.theory_rooms.as_count(),
        req.lab_rooms.as_count(),
        req.start_time.as_count(),
        req.end_time.as_count(),
        req.lec_duration.as_count(),
        req.lab_duration.as_count(),
    );
    let (divisions, theory_rooms, lab_rooms, start, end, lec, lab) = match counts {
        (Some(d), Some(tr), Some(lr), Some(s), Some(e), Some(l), Some(b)) if l > 0 && b > 0 && tr > 0 && lr > 0 => {
            (d, tr, lr, s, e, l, b)
        }
        _ => return (400, json!({ "error": "Unable to generate timetable due to conflicts or invalid data." })),
    };
    if divisions == 0 || req.subjects.is_empty() || req.teachers.is_empty() {
        return (400, json!({ "error": "Unable to generate timetable due to conflicts or invalid data." }));
    }

    let mut rng = rand::thread_rng();
    let theory_room_ids: Vec<u64> = (1..=theory_rooms).collect();
    let lab_room_ids: Vec<u64> = (1..=lab_rooms).collect();
    let mut timetable = Map::new();

    for division in 1..=divisions {
        let mut theory = Map::new();
        let mut practical = Map::new();

        for day in &req.days {
            let mut teachers = req.teachers.clone();
            let mut rooms = theory_room_ids.clone();
            teachers.shuffle(&mut rng);
            rooms.shuffle(&mut rng);

            let mut sessions = Vec::new();
            let mut t = start;
            for (teacher, room) in teachers.iter().zip(&rooms) {
                if t + lec > end {
                    break;
                }
                let subject = req.subjects.choose(&mut rng).cloned().unwrap_or_default();
                sessions.push(json!({
                    "subject": subject, "teacher": teacher, "room": room,
                    "time": format!("{}:00 - {}:00", t, t + lec),
                }));
                t += lec;
            }
            theory.insert(day.clone(), Value::Array(sessions));

            let mut batches = Vec::new();
            for batch in &req.batches {
                let mut lab_teachers = req.teachers.clone();
                let mut lab_rooms = lab_room_ids.clone();
                lab_teachers.shuffle(&mut rng);
                lab_rooms.shuffle(&mut rng);

                let mut labs = Vec::new();
                let mut t = start;
                for ((subject, teacher), room) in req.practical_subjects.iter().zip(&lab_teachers).zip(&lab_rooms) {
                    if t + lab > end {
                        break;
                    }
                    labs.push(json!({
                        "subject": subject, "teacher": teacher, "room": room,
                        "time": format!("{}:00 - {}:00", t, t + lab),
                    }));
                    t += lab;
                }
                let mut entry = Map::new();
                entry.insert(batch.clone(), Value::Array(labs));
                batches.push(Value::Object(entry));
            }
            practical.insert(day.clone(), Value::Array(batches));
        }

        timetable.insert(
            format!("Division-{}", division),
            json!({ "theory": theory, "practical": practical }),
        );
    }

    (200, Value::Object(timetable))
}
