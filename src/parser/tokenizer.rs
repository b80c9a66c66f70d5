use crate::parser::argument_map::ArgumentMap;
use crate::parser::syntax::Prefix;

#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Splits `args` into a preamble and prefixed values.
///
/// A prefix only counts when it sits at the start of `args` or right after
/// whitespace, so `p/` inside `abc@p/q` stays part of the surrounding value.
/// Text before the first prefix becomes the preamble; each value runs from
/// the end of its prefix to the start of the next one. Both are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let positions = find_all_prefix_positions(args, prefixes);
    extract_arguments(args, &positions)
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    let mut positions: Vec<PrefixPosition> = Vec::new();
    for (i, prefix) in prefixes.iter().enumerate() {
        if prefix.is_empty() || prefixes[..i].contains(prefix) {
            continue;
        }
        positions.extend(find_prefix_positions(args, *prefix));
    }

    // When one prefix text starts another at the same spot, the longer one wins.
    positions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.prefix.len().cmp(&a.prefix.len()))
    });
    positions.dedup_by_key(|p| p.start);
    positions
}

fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<PrefixPosition> {
    args.match_indices(prefix.as_str())
        .filter(|(start, _)| is_boundary(args, *start))
        .map(|(start, _)| PrefixPosition { prefix, start })
        .collect()
}

fn is_boundary(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}

fn extract_arguments(args: &str, positions: &[PrefixPosition]) -> ArgumentMap {
    let preamble_end = positions.first().map_or(args.len(), |p| p.start);
    let mut map = ArgumentMap::new(args[..preamble_end].trim().to_string());

    for (i, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.len();
        let value_end = positions
            .get(i + 1)
            .map_or(args.len(), |next| next.start)
            .max(value_start);
        map.push(position.prefix, args[value_start..value_end].trim().to_string());
    }

    map
}
