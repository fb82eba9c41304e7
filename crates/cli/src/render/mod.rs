//! Response rendering: dig-style text, `--short` lines, or `--json`.

use dnsx_application::QueryOutcome;
use dnsx_domain::{class_name, type_name, ClientOptions, ColorMode, DnsRecord, EdnsMode, Flags};
use serde_json::json;
use std::io::IsTerminal;

const BOLD: &str = "1";
const GREEN: &str = "32";
const YELLOW: &str = "33";
const CYAN: &str = "36";

pub struct Renderer {
    short: bool,
    json: bool,
    seconds: bool,
    time: bool,
    edns: EdnsMode,
    color_enabled: bool,
}

impl Renderer {
    pub fn new(options: &ClientOptions) -> Self {
        let color_enabled = match options.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        Self {
            short: options.short,
            json: options.json,
            seconds: options.seconds,
            time: options.time,
            edns: options.edns,
            color_enabled,
        }
    }

    pub fn render(&self, outcomes: &[QueryOutcome]) -> String {
        if self.json {
            self.render_json(outcomes)
        } else if self.short {
            self.render_short(outcomes)
        } else {
            self.render_text(outcomes)
        }
    }

    fn render_short(&self, outcomes: &[QueryOutcome]) -> String {
        let mut out = String::new();
        for outcome in outcomes {
            for record in &outcome.response.answers {
                out.push_str(&record.data.to_string());
                out.push('\n');
            }
        }
        out
    }

    fn render_text(&self, outcomes: &[QueryOutcome]) -> String {
        let mut out = String::new();
        for (index, outcome) in outcomes.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.render_outcome(&mut out, outcome);
        }
        out
    }

    fn render_outcome(&self, out: &mut String, outcome: &QueryOutcome) {
        let response = &outcome.response;
        let additionals = self.visible_additionals(response.additionals.as_slice());

        out.push_str(&format!(
            ";; ->>HEADER<<- opcode: QUERY, status: {}, id: {}\n",
            self.paint(&response.flags.rcode_str(), BOLD),
            response.id
        ));
        out.push_str(&format!(
            ";; flags:{}; QUERY: 1, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}\n",
            flags_line(&response.flags),
            response.answers.len(),
            response.authorities.len(),
            additionals.len(),
        ));

        out.push_str(&format!(
            "\n;; QUESTION SECTION:\n; {}\t\t{}\t{}\n",
            self.paint(&fqdn(&outcome.query.domain), GREEN),
            outcome.query.class,
            outcome.query.record_type,
        ));

        self.render_section(out, "ANSWER", &response.answers);
        self.render_section(out, "AUTHORITY", &response.authorities);
        self.render_section(out, "ADDITIONAL", &additionals);

        if self.time {
            out.push_str(&format!(
                "\n;; Query time: {} ms\n",
                outcome.elapsed.as_millis()
            ));
            out.push_str(&format!(
                ";; SERVER: {} ({})\n",
                outcome.server, outcome.protocol
            ));
        }
    }

    fn render_section(&self, out: &mut String, title: &str, records: &[DnsRecord]) {
        if records.is_empty() {
            return;
        }
        out.push_str(&format!("\n;; {} SECTION:\n", self.paint(title, CYAN)));
        for record in records {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                self.paint(&fqdn(&record.name), GREEN),
                self.format_ttl(record.ttl),
                class_name(record.class),
                self.paint(&type_name(record.rtype), YELLOW),
                record.data,
            ));
        }
    }

    fn render_json(&self, outcomes: &[QueryOutcome]) -> String {
        let rendered: Vec<_> = outcomes
            .iter()
            .map(|outcome| {
                let response = &outcome.response;
                let flags = &response.flags;
                json!({
                    "query": {
                        "name": outcome.query.domain,
                        "type": outcome.query.record_type.as_str(),
                        "class": outcome.query.class.as_str(),
                    },
                    "server": outcome.server,
                    "protocol": outcome.protocol,
                    "status": flags.rcode_str(),
                    "flags": {
                        "qr": flags.response,
                        "aa": flags.authoritative,
                        "tc": flags.truncated,
                        "rd": flags.recursion_desired,
                        "ra": flags.recursion_available,
                        "ad": flags.authentic_data,
                        "cd": flags.checking_disabled,
                    },
                    "answers": json_records(&response.answers),
                    "authorities": json_records(&response.authorities),
                    "additionals": json_records(&self.visible_additionals(&response.additionals)),
                    "time_ms": outcome.elapsed.as_millis() as u64,
                })
            })
            .collect();

        serde_json::to_string_pretty(&rendered).unwrap_or_else(|_| "[]".to_string())
    }

    /// OPT pseudo-records are shown only under `--edns show`.
    fn visible_additionals(&self, records: &[DnsRecord]) -> Vec<DnsRecord> {
        records
            .iter()
            .filter(|record| self.edns == EdnsMode::Show || !record.is_opt())
            .cloned()
            .collect()
    }

    fn format_ttl(&self, ttl: u32) -> String {
        if self.seconds {
            ttl.to_string()
        } else {
            humanize_ttl(ttl)
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color_enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

fn json_records(records: &[DnsRecord]) -> Vec<serde_json::Value> {
    records
        .iter()
        .map(|record| {
            json!({
                "name": record.name,
                "type": type_name(record.rtype),
                "class": class_name(record.class),
                "ttl": record.ttl,
                "data": record.data.to_string(),
            })
        })
        .collect()
}

fn flags_line(flags: &Flags) -> String {
    let mut line = String::new();
    for (set, label) in [
        (flags.response, " qr"),
        (flags.authoritative, " aa"),
        (flags.truncated, " tc"),
        (flags.recursion_desired, " rd"),
        (flags.recursion_available, " ra"),
        (flags.authentic_data, " ad"),
        (flags.checking_disabled, " cd"),
    ] {
        if set {
            line.push_str(label);
        }
    }
    line
}

fn fqdn(name: &str) -> String {
    if name == "." || name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Compact TTL form: `300` → `5m`, `90061` → `1d1h1m1s`.
fn humanize_ttl(ttl: u32) -> String {
    if ttl == 0 {
        return "0s".to_string();
    }

    let mut remaining = ttl;
    let mut out = String::new();
    for (unit, label) in [(86400, "d"), (3600, "h"), (60, "m"), (1, "s")] {
        let count = remaining / unit;
        if count > 0 {
            out.push_str(&format!("{}{}", count, label));
            remaining -= count * unit;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_humanization() {
        assert_eq!(humanize_ttl(0), "0s");
        assert_eq!(humanize_ttl(45), "45s");
        assert_eq!(humanize_ttl(300), "5m");
        assert_eq!(humanize_ttl(3660), "1h1m");
        assert_eq!(humanize_ttl(90061), "1d1h1m1s");
    }

    #[test]
    fn fqdn_appends_a_single_trailing_dot() {
        assert_eq!(fqdn("example.com"), "example.com.");
        assert_eq!(fqdn("example.com."), "example.com.");
        assert_eq!(fqdn("."), ".");
    }

    #[test]
    fn flags_line_lists_set_bits_in_header_order() {
        let flags = Flags {
            response: true,
            recursion_desired: true,
            recursion_available: true,
            ..Flags::default()
        };
        assert_eq!(flags_line(&flags), " qr rd ra");
    }
}
