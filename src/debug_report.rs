use archrank::{ArchColor, ArchScore, CompileStats, Id, Pool};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

struct Row {
    id: Id,
    name: String,
    score: ArchScore,
    color: ArchColor,
}

pub fn print_report(input: &str, pool: &mut Pool, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Architecture: \"{}\"", input), ansi::CYAN)));

    let Some(policy) = pool.arch_policy() else {
        println!("{}", palette.dim("  No policy set"));
        return;
    };
    let source = policy.source().to_string();
    let stats = policy.stats().clone();
    let last_arch = policy.last_arch();
    let ranked = policy.ranked();

    let rows: Vec<Row> = ranked
        .into_iter()
        .map(|(id, score)| Row { id, name: pool.resolve(id).to_string(), score, color: pool.classify(id) })
        .collect();

    if source != input {
        println!("  {} {}", palette.dim("expands to:"), palette.paint(&source, ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Preference ━━━", ansi::GRAY));
    print_rows(&rows, &palette);

    println!("\n{}", palette.paint("━━━ Compile ━━━", ansi::GRAY));
    print_stats(&stats, last_arch, &palette);
    println!();
}

fn print_rows(rows: &[Row], palette: &ansi::Palette) {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut previous: Option<ArchScore> = None;

    for row in rows {
        let boundary = match previous {
            Some(prev) if !prev.same_tier(row.score) => palette.paint(":", ansi::MAGENTA),
            Some(prev) if prev != row.score => palette.paint(">", ansi::YELLOW),
            Some(_) => palette.dim("="),
            None => " ".to_string(),
        };
        previous = Some(row.score);

        println!(
            "  {} {} {}  {} {}  {}",
            boundary,
            palette.bold(palette.paint(format!("{:<width$}", row.name), ansi::GREEN)),
            palette.dim(format!("{}", row.id)),
            palette.paint(format!("tier {} rank {}", row.score.tier, row.score.rank), ansi::CYAN),
            palette.dim(format!("(0x{:08x})", row.score.packed())),
            fmt_color(row.color, palette),
        );
    }
}

fn print_stats(stats: &CompileStats, last_arch: usize, palette: &ansi::Palette) {
    println!(
        "  Tokens: {}  │  Duplicates: {}  │  Empty: {}",
        palette.paint(stats.tokens.to_string(), ansi::GREEN),
        palette.paint(stats.duplicates.to_string(), ansi::YELLOW),
        palette.dim(stats.empty_tokens.to_string()),
    );
    println!(
        "  Tier steps: {}  │  Rank steps: {}  │  Extent: {} ({} regrow)",
        palette.paint(stats.tier_steps.to_string(), ansi::MAGENTA),
        palette.paint(stats.rank_steps.to_string(), ansi::YELLOW),
        palette.paint(last_arch.to_string(), ansi::BLUE),
        stats.grows,
    );
    println!("  Elapsed: {}", palette.paint(format!("{:?}", stats.elapsed), ansi::GREEN));
}

fn fmt_color(color: ArchColor, palette: &ansi::Palette) -> String {
    let code = if color == ArchColor::BITS_64 {
        ansi::BLUE
    } else if color == ArchColor::BITS_32 {
        ansi::YELLOW
    } else {
        ansi::GRAY
    };
    palette.paint(color.label(), code)
}
