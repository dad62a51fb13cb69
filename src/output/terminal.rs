//! Terminal report formatting.

use crate::processing::SubnetInfo;

/// Width of the label column.
pub const LABEL_WIDTH: usize = 12;

/// Format a label/value pair as one report line.
///
/// # Arguments
/// * `label` - The label, including its trailing colon
/// * `value` - The value printed after the label column
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    format!("{:<width$} {}", label, value.to_string(), width = LABEL_WIDTH)
}

/// Render the full report for one subnet.
///
/// `address` is echoed exactly as the user typed it. `prefix` is the text
/// shown after `=` on the `Subnet:` line; `None` shows the computed prefix
/// length.
pub fn format_report(address: &str, prefix: Option<&str>, info: &SubnetInfo) -> String {
    let prefix = prefix.map_or_else(|| info.prefix.to_string(), str::to_string);
    let lines = [
        format_field("IP Address:", address),
        format_field("Subnet:", format!("{} = {}", info.netmask, prefix)),
        format_field("Wildcard:", info.wildcard),
        format_field(
            "IP Range:",
            format!("{} -> {}", info.network, info.broadcast),
        ),
        format_field("Host Min:", info.host_min),
        format_field("Host Max:", info.host_max),
        format_field("Hosts:", info.usable_hosts),
        format_field("Class:", info.class),
    ];

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
