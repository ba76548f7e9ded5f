//! Writes `student_dummy_data.csv`: synthetic per-student, per-semester
//! ECTS records in the dashboard's input format (`;`, Latin-1, decimal comma).

use csv::{ByteRecord, WriterBuilder};

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Latin-1 bytes of `s`; characters outside Latin-1 become `?`.
fn encode_latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// `27.5` → `"27,5"`
fn decimal_comma(v: f64) -> String {
    format!("{v:.1}").replace('.', ",")
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (program, regulation, ECTS in the first semester, change per semester)
    let programs = [
        ("BA; PPP", "Prüfungsordnung 2019", 24.0, -0.8),
        ("MA; PPP", "Prüfungsordnung 2020", 22.0, -1.5),
        ("BA; BI", "Prüfungsordnung 2019", 21.0, -0.4),
        ("MA; BI", "Prüfungsordnung 2021", 19.0, -1.0),
    ];
    let students_per_program = 40;
    let max_semester = 10;

    let output_path = "student_dummy_data.csv";
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .expect("Failed to create output file");

    let header = ["ID", "STUDBEZ_kompakt", "Prüfungsordnung", "besuchtesSemester", "ECTS_Sem"];
    writer
        .write_byte_record(&ByteRecord::from(
            header.iter().map(|h| encode_latin1(h)).collect::<Vec<_>>(),
        ))
        .expect("Failed to write header");

    let mut rows = 0usize;
    let mut student_id = 1000u32;
    for &(program, regulation, start, slope) in &programs {
        for _ in 0..students_per_program {
            student_id += 1;
            let ability = rng.gauss(0.0, 3.0);
            // Some students leave before the last semester.
            let last = 4 + (rng.next_f64() * (max_semester - 3) as f64) as i64;

            for semester in 1..=last.min(max_semester) {
                let expected = start + slope * (semester - 1) as f64 + ability;
                let ects = (rng.gauss(expected, 4.0).clamp(0.0, 35.0) * 2.0).round() / 2.0;

                let fields = [
                    student_id.to_string(),
                    program.to_string(),
                    regulation.to_string(),
                    semester.to_string(),
                    decimal_comma(ects),
                ];
                writer
                    .write_byte_record(&ByteRecord::from(
                        fields.iter().map(|f| encode_latin1(f)).collect::<Vec<_>>(),
                    ))
                    .expect("Failed to write record");
                rows += 1;
            }
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {rows} records ({} programs, {students_per_program} students each) to {output_path}",
        programs.len()
    );
}
