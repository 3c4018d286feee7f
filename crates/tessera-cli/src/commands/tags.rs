use crate::support::print_json;
use serde_json::json;
use tessera_semantics::SemanticTag;

pub fn run(json_output: bool) {
    if json_output {
        let rows: Vec<_> = SemanticTag::ALL
            .iter()
            .map(|tag| {
                json!({
                    "tag": tag,
                    "flags": tag.flags(),
                    "operation": tag.operation(),
                    "description": tag.operation().describe(),
                })
            })
            .collect();
        print_json(&json!({ "action": "tags", "tags": rows }));
    } else {
        print!("{}", render());
    }
}

fn render() -> String {
    let mut out = String::from("tessera tags\n  TAG      KEEP  MOVE  SHALLOW  OPERATION\n");
    for tag in SemanticTag::ALL {
        out.push_str(&format!(
            "  {:<8} {:<5} {:<5} {:<8} {} ({})\n",
            tag.name(),
            yes_no(tag.keep()),
            yes_no(tag.moves()),
            yes_no(tag.shallow()),
            tag.operation(),
            tag.operation().describe(),
        ));
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_table() {
        insta::assert_snapshot!(render(), @r"
        tessera tags
          TAG      KEEP  MOVE  SHALLOW  OPERATION
          Copy     yes   no    yes      share (shallow copy, ownership shared)
          Move     yes   yes   yes      steal (take resources, fully reset source)
          Abandon  no    yes   yes      abandon (take resources, minimally reset source)
          Disown   no    no    yes      disown (shallow copy, no ownership bookkeeping)
          Clone    yes   no    no       deep (recursive deep copy)
        ");
    }
}
