use console::Style;
use histeq_core::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use histeq_core::histogram::FrequencyTable;
use histeq_core::pipeline::config::PipelineConfig;
use histeq_core::pipeline::EqualizeReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &PipelineConfig) {
    let s = Styles::new();
    let eq = &config.equalize;

    println!();
    println!("  {}", s.title.apply_to("Histogram Equalization"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(22)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Luminance"),
        s.method.apply_to(format!(
            "{LUMINANCE_R:.2} R + {LUMINANCE_G:.2} G + {LUMINANCE_B:.2} B ({})",
            eq.quantization
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rounding"),
        s.method.apply_to(eq.rounding)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stretch"),
        s.method.apply_to(if eq.stretch_output { "0-255" } else { "off" })
    );
    println!();
}

pub fn print_report_summary(report: &EqualizeReport, converted: bool) {
    let s = Styles::new();

    println!();
    if converted {
        println!("  {}", s.label.apply_to("Source was color; converted to luminance"));
    }
    print_table(&s, "Before", &report.before);
    print_table(&s, "After", &report.after);
}

fn print_table(s: &Styles, heading: &str, table: &FrequencyTable) {
    println!("  {}", s.header.apply_to(heading));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pixels"),
        s.value.apply_to(table.total())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Levels"),
        s.value.apply_to(table.levels())
    );
    if let (Some(min), Some(max)) = (table.min_value(), table.max_value()) {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Range"),
            s.value.apply_to(format!("{min}-{max}"))
        );
    }
}
