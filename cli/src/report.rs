use folio_theme::audit::ContrastReport;
use folio_theme::contrast::AA_NORMAL;
use folio_theme::validation::ValidationResult;

pub fn print_validation_result(result: &ValidationResult, verbose: bool) {
    println!("{}", "=".repeat(80));
    println!("PROFILE VALIDATION");
    println!("{}", "=".repeat(80));
    println!("\nFile: {}", result.path);

    if !result.errors.is_empty() {
        println!("\nX ERRORS ({})\n", result.errors.len());
        for error in &result.errors {
            println!("  * {}", error);
        }
    }

    if result.has_warnings() {
        println!("\n! WARNINGS ({})\n", result.warnings.len());
        for warning in &result.warnings {
            println!("  * {}", warning);
        }
    }

    if let (true, Some(seed)) = (verbose, result.seed) {
        println!("\n  primary:   {}", seed.primary);
        println!("  secondary: {}", seed.secondary);
    }

    if result.is_valid() && !result.has_warnings() {
        println!("\n+ Profile passed validation!");
    } else if result.is_valid() {
        println!("\n+ Profile is valid (with some warnings)");
    }
}

pub fn print_contrast_reports(reports: &[ContrastReport], verbose: bool) {
    let failures: Vec<_> = reports.iter().filter(|r| !r.pass).collect();
    let passes: Vec<_> = reports.iter().filter(|r| r.pass).collect();

    println!("{}", "=".repeat(80));
    println!("WCAG CONTRAST CHECK RESULTS");
    println!("Target: {}:1 (WCAG AA Normal Text)", AA_NORMAL);
    println!("{}", "=".repeat(80));

    if failures.is_empty() {
        println!(
            "\n✅ All {} color pairs pass WCAG AA requirements!",
            reports.len()
        );
    } else {
        println!("\n❌ BELOW TARGET ({} pairs, advisory)\n", failures.len());
        println!("{:<36} {:>8} {:<10}", "Pair", "Ratio", "Grade");
        println!("{}", "-".repeat(60));

        for r in &failures {
            println!("{:<36} {:>7.2}:1 {:<10}", r.pair, r.ratio, r.grade.label());
            println!("{:36} bg: {}  fg: {}", "", r.bg, r.fg);
        }
    }

    if verbose && !passes.is_empty() {
        println!("\n✅ PASSING ({} checks)\n", passes.len());
        for r in &passes {
            println!("{:<36} {:>7.2}:1 {}", r.pair, r.ratio, r.grade.label());
        }
    }
}
