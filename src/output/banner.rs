//! ASCII banner printed above the report.

/// The `mask` banner, followed by an empty line.
pub fn banner() -> String {
    [
        r"                     _    ",
        r" _ __ ___   __ _ ___| | __",
        r"| '_ ` _ \ / _` / __| |/ /",
        r"| | | | | | (_| \__ \   < ",
        r"|_| |_| |_|\__,_|___/_|\_\",
        "",
        "",
    ]
    .join("\n")
}
