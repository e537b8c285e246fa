//! Synthetic transcript generator for stress testing whatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🤯", "💀", "🔥", "👍", "❤️", "🎉",
    "🙏", "👏", "🤷‍♀️", "🇮🇳",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+91 98765 43210",
    "Dr. Smith: MD",
];

const WORDS: &[&str] = &[
    "hello", "pizza", "meeting", "tomorrow", "kal", "milte", "hain", "awesome", "haha", "ok",
    "where", "project", "deadline", "party", "bhai", "yaar", "movie", "tonight", "done", "call",
];

const NOTIFICATIONS: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice created group \"Weekend plans\"",
    "Alice added Bob",
    "Иван left",
    "Bob changed the subject to \"Trip: day 2\"",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    generate_transcript(count, output);
}

fn generate_transcript(count: usize, output: &str) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    let mut timestamp = NaiveDate::from_ymd_opt(2022, 12, 25)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid start date");

    for i in 0..count {
        timestamp += Duration::minutes(rng.gen_range(1..=240));

        let line = if i % 50 == 0 {
            let notice = NOTIFICATIONS.choose(&mut rng).unwrap();
            format!("{}{}\n", header(timestamp), notice)
        } else {
            let sender = SENDERS.choose(&mut rng).unwrap();
            let body = generate_body(&mut rng, i);
            format!("{}{}: {}\n", header(timestamp), sender, body)
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
}

/// `d/m/yy, h:mm am - ` with the export's unpadded day, month and hour.
fn header(timestamp: NaiveDateTime) -> String {
    format!(
        "{}, {} - ",
        timestamp.format("%-d/%-m/%y"),
        timestamp.format("%-I:%M %P")
    )
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=5 => {
            let len = rng.gen_range(1..12);
            (0..len)
                .map(|_| *WORDS.choose(rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        }
        6 => "<Media omitted>".to_string(),
        7 => format!("check this https://example.com/item/{} and www.example.org", index),
        8 => {
            let emojis: String = (0..rng.gen_range(1..6))
                .map(|_| *EMOJIS.choose(rng).unwrap())
                .collect();
            format!("{} {}", WORDS.choose(rng).unwrap(), emojis)
        }
        // Multi-line body; continuation lines never start with a timestamp
        9 => format!("first line #{}\nsecond line\n\nfourth: after a gap", index),
        10 => format!("time is 10:30 - ratio 3:2 #{}", index),
        _ => format!("Normal message #{} with some text", index),
    }
}
