use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bob", "Carla", "Diana", "Eli", "Fatima", "Gus", "Hana", "Ivan", "Jae", "Kofi", "Lena",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Cruz", "Nguyen", "O'Neil", "Park", "Diaz", "Okafor", "Rossi", "Kim", "Haddad",
];
const LEVELS: [&str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Student {
    name: String,
    id: String,
    level: &'static str,
    email: String,
}

fn make_students(rng: &mut SimpleRng, count: usize) -> Vec<Student> {
    (0..count)
        .map(|_| {
            let first = rng.pick(&FIRST_NAMES);
            let last = rng.pick(&LAST_NAMES);
            let id = 900_000 + rng.next_u64() % 100_000;
            let handle: String = format!("{first}.{last}")
                .to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
                .collect();
            Student {
                name: format!("{first} {last}"),
                id: id.to_string(),
                level: rng.pick(&LEVELS),
                email: format!("{handle}@example.edu"),
            }
        })
        .collect()
}

/// Write one roster. `headers` are the name/id/level/email column titles.
fn write_roster(path: &Path, headers: [&str; 4], students: &[Student], bom: bool) -> Result<()> {
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if bom {
        file.write_all("\u{feff}".as_bytes())?;
    }

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(headers)?;
    for s in students {
        writer.write_record([s.name.as_str(), s.id.as_str(), s.level, s.email.as_str()])?;
    }
    // A row with a blank name is dropped by the loader.
    writer.write_record(["", "000000", "", ""])?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_rosters"));
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let primary = ["Student Name", "Student ID", "Class Level", "Preferred Email"];
    let secondary = ["Name", "ID", "Level", "Email"];

    let rosters: [(&str, [&str; 4], usize, bool); 3] = [
        ("SOC-1101-W01.csv", primary, 25, true),
        ("MATH-2200-A1.csv", secondary, 18, false),
        ("biology_lab.csv", primary, 12, false),
    ];

    for (file_name, headers, count, bom) in rosters {
        let students = make_students(&mut rng, count);
        let path = out_dir.join(file_name);
        write_roster(&path, headers, &students, bom)?;
        println!("Wrote {count} students to {}", path.display());
    }

    Ok(())
}
