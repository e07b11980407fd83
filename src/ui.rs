use anyhow::Result;
use console::{Style, Term};
use fortress::{FailureReason, Generated, GenerationRequest};

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 16;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

pub fn display_passwords(
    passwords: &[Generated],
    request: &GenerationRequest,
    options: &DisplayOptions,
) {
    if options.quiet {
        for generated in passwords {
            println!("{}", &*generated.password);
        }
        return;
    }

    for (i, generated) in passwords.iter().enumerate() {
        println!("Out[{}]:\n{}", i, &*generated.password);
    }
    println!();

    if let Some(first) = passwords.first() {
        display_settings(request, first.pool_size);
        display_stats(first, request.length, options);
    }
}

fn display_settings(request: &GenerationRequest, pool_size: usize) {
    let categories: Vec<String> = request
        .categories
        .iter()
        .map(|category| category.to_string())
        .collect();

    println!("Settings:");
    println!("  ├─ Charset    {}", categories.join(", "));
    println!(
        "  ├─ Ambiguous  {}",
        if request.exclude_ambiguous {
            "excluded"
        } else {
            "included"
        }
    );
    println!("  ├─ Pool       {} {}", pool_size, plural(pool_size, "char", "chars"));
    println!("  ├─ Keystream  ChaCha20 (OS-seeded)");
    println!("  └─ Sampling   Unbiased rejection");
    println!();
}

fn display_stats(generated: &Generated, length: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let entropy_style = if options.color_support {
        Style::new().fg(generated.color.terminal())
    } else {
        Style::new()
    };

    let length_secure = length >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = if options.color_support {
        if length_secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };
    let length_status = if length_secure { check_ok } else { check_warn };

    let strength_text = if options.unicode_support {
        format!("{} {}", generated.strength.label(), generated.strength.badge())
    } else {
        generated.strength.label().to_string()
    };

    println!("Stats:");
    println!(
        "  ├─ Entropy    {} bits",
        entropy_style.apply_to(format!("{:.1}", generated.entropy_bits))
    );
    println!(
        "  ├─ Length     {} {} {}",
        length_style.apply_to(format!("[{}]", length_status)),
        length_style.apply_to(length),
        plural(length, "char", "chars")
    );
    println!("  └─ Strength   {}", entropy_style.apply_to(&strength_text));
}

pub fn display_failure(reason: FailureReason, options: &DisplayOptions) -> Result<()> {
    let term = Term::stderr();
    let (_, check_warn) = get_status_symbols(options.unicode_support);

    let style = if options.color_support {
        Style::new().red()
    } else {
        Style::new()
    };

    term.write_line(&format!(
        "{} {}",
        style.apply_to(format!("[{}]", check_warn)),
        style.apply_to(reason.message())
    ))?;

    Ok(())
}
