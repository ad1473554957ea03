//! Parameter groups as `type name[dimension]` lines

use tracing::debug;

use crate::language::{FormatError, Parameter, ParameterGroup};

/// One parameter per line; the dimension suffix only for arrays.
pub fn decode(group: &ParameterGroup) -> String {
    group
        .0
        .iter()
        .map(|parameter| {
            if parameter.is_scalar() {
                format!("{} {}", parameter.base_type, parameter.name)
            } else {
                format!(
                    "{} {}[{}]",
                    parameter.base_type, parameter.name, parameter.dimension
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse edited text back into a group. Blank lines are skipped; any other
/// line that is not a valid declaration fails the whole group.
pub fn encode(text: &str) -> Result<ParameterGroup, FormatError> {
    let re = crate::compile!(
        r"^\s*(iconic|ctrl)\s+([$_a-zA-Z][$_a-zA-Z0-9]*)\s*(?:\[(\d+)\])?\s*$"
    );

    let mut parameters = Vec::new();

    for line in text.split('\n') {
        if line
            .trim()
            .is_empty()
        {
            continue;
        }

        let captures = re
            .captures(line)
            .ok_or_else(|| FormatError {
                line: line.to_string(),
            })?;

        let dimension = match captures.get(3) {
            Some(digits) => digits
                .as_str()
                .parse::<u32>()
                .map_err(|_| FormatError {
                    line: line.to_string(),
                })?,
            None => 0,
        };

        parameters.push(Parameter::new(&captures[1], &captures[2], dimension));
    }

    debug!("Encoded {} parameters", parameters.len());

    Ok(ParameterGroup(parameters))
}
