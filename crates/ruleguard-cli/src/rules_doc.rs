/// One documented rule: registered name, usage and description.
struct RuleDoc {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
}

const RULE_DOCS: &[RuleDoc] = &[
    RuleDoc {
        name: "required",
        usage: "required",
        description: "Not null, not blank text, not an empty list or mapping",
    },
    RuleDoc {
        name: "isEmail",
        usage: "email",
        description: "Email address with a dotted domain, at most 254 characters",
    },
    RuleDoc {
        name: "isDate",
        usage: "date",
        description: "Parses as a real calendar date (ISO, slash, dotted, RFC 3339, RFC 2822)",
    },
    RuleDoc {
        name: "isDatetime",
        usage: "datetime[:FORMAT]",
        description: "Round trips through FORMAT in date() letters, default 'Y-m-d H:i:s'",
    },
    RuleDoc {
        name: "isUrl",
        usage: "url",
        description: "scheme://host URL, or a mailto:/news: URI",
    },
    RuleDoc {
        name: "isMatch",
        usage: "match:PATTERN",
        description: "Matches PATTERN, '/.../flags' delimiters accepted",
    },
    RuleDoc {
        name: "length",
        usage: "length:MIN[,MAX]",
        description: "Character count within bounds, empty MAX is unbounded",
    },
    RuleDoc {
        name: "range",
        usage: "range:MIN[,MAX]",
        description: "Number or numeric text within bounds",
    },
    RuleDoc {
        name: "isBool",
        usage: "bool",
        description: "true, false, 0, 1, \"0\" or \"1\"",
    },
    RuleDoc {
        name: "isString",
        usage: "string",
        description: "Value is text",
    },
    RuleDoc {
        name: "isInt",
        usage: "int",
        description: "Integer, integral number or integer literal text",
    },
    RuleDoc {
        name: "isNumeric",
        usage: "numeric",
        description: "Number or numeric text",
    },
    RuleDoc {
        name: "isArray",
        usage: "array",
        description: "List or mapping",
    },
    RuleDoc {
        name: "isEqual",
        usage: "equal[:VALUE]",
        description: "Loosely equal to VALUE",
    },
    RuleDoc {
        name: "isSame",
        usage: "same[:VALUE]",
        description: "Text identical to VALUE",
    },
    RuleDoc {
        name: "isSameCi",
        usage: "sameCi[:VALUE]",
        description: "Text equal to VALUE ignoring case",
    },
    RuleDoc {
        name: "isIp",
        usage: "ip",
        description: "IPv4 or IPv6 address",
    },
    RuleDoc {
        name: "isJson",
        usage: "json",
        description: "Well-formed JSON text",
    },
    RuleDoc {
        name: "in",
        usage: "in:A,B,...",
        description: "Loosely equal to one of the listed values",
    },
    RuleDoc {
        name: "notin",
        usage: "notin:A,B,...",
        description: "Loosely equal to none of the listed values",
    },
];

/// Print the documentation of all available validation rules
pub fn print_rules_documentation() {
    println!("{}", rules_documentation());
}

fn rules_documentation() -> String {
    let rule = "━".repeat(78);
    let mut out = format!("\n{rule}\n RULEGUARD VALIDATION RULES\n{rule}\n");
    for doc in RULE_DOCS {
        out.push_str(&format!(
            "  {:<12} {:<20} {}\n",
            doc.name, doc.usage, doc.description
        ));
    }
    out.push_str(&format!(
        r#"{rule}
 USAGE NOTES
{rule}
  • Clauses are separated by '|' and run in order, e.g. "required|email"
  • The first failing clause stops validation of the form
  • 'is' names also answer to their short spelling: isEmail, email, Email
  • Custom messages: map each clause to its message in a rule table
    age = {{ "required" = "age is required", "range:18,130" = "out of range" }}
{rule}
"#
    ));
    out
}
