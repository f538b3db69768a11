use std::collections::BTreeMap;

use shapediff_core::{Field, Introspect, Shape, canonical, describe};

use crate::{DiffOptions, Line, render};

/// Walks two values in lock-step and produces the lines describing where they diverge.
pub(crate) struct Differ<'o> {
    options: &'o DiffOptions,
}

impl<'o> Differ<'o> {
    pub(crate) fn new(options: &'o DiffOptions) -> Self {
        Self { options }
    }

    /// Compares two values, producing lines at `level`.
    pub(crate) fn lines(
        &self,
        expected: &dyn Introspect,
        received: &dyn Introspect,
        level: usize,
    ) -> Vec<Line> {
        let expected_shape = expected.shape();
        let received_shape = received.shape();
        trace!(
            level,
            expected = %expected_shape.kind(),
            received = %received_shape.kind(),
            "comparing"
        );

        // a present optional adds no level of its own
        if let (Shape::Optional(Some(e)), Shape::Optional(Some(r))) =
            (&expected_shape, &received_shape)
        {
            return self.lines(*e, *r, level);
        }

        let expected_count = expected_shape.child_count();
        let received_count = received_shape.child_count();

        if expected_count == 0 || received_count == 0 {
            if canonical(expected) == canonical(received) {
                return Vec::new();
            }
            if expected_shape.is_collection()
                && expected_shape.kind() == received_shape.kind()
                && expected_count != received_count
            {
                return self.count_mismatch(expected, received, expected_count, received_count, level);
            }
            return self.pair(
                leaf_text(&expected_shape, expected),
                leaf_text(&received_shape, received),
                level,
            );
        }

        match (&expected_shape, &received_shape) {
            (Shape::Union(e), Shape::Union(r)) if e.case != r.case => {
                trace!(expected = e.case, received = r.case, "case mismatch");
                self.pair(e.case.to_owned(), r.case.to_owned(), level)
            }
            (Shape::Sequence(_), Shape::Sequence(_))
            | (Shape::Map(_), Shape::Map(_))
            | (Shape::Set(_), Shape::Set(_))
            | (Shape::Union(_), Shape::Union(_))
                if expected_count != received_count =>
            {
                self.count_mismatch(expected, received, expected_count, received_count, level)
            }
            (Shape::Map(e), Shape::Map(r)) => self.map(e, r, level),
            (Shape::Set(e), Shape::Set(r)) => self.set(e, r, level),
            (Shape::Record(e), Shape::Record(r))
                if e.type_name == r.type_name && same_layout(&e.fields, &r.fields) =>
            {
                self.fields(&e.fields, &r.fields, level)
            }
            (Shape::Union(e), Shape::Union(r)) if same_layout(&e.payload, &r.payload) => {
                self.fields(&e.payload, &r.payload, level)
            }
            (Shape::Sequence(e), Shape::Sequence(r)) => {
                let labels = (0..e.len()).map(|index| format!("Collection[{index}]:"));
                let pairs = e.iter().zip(r.iter()).map(|(e, r)| (*e, *r));
                self.children(labels.zip(pairs), level)
            }
            _ => {
                trace!(level, "shapes cannot be compared structurally, comparing renderings");
                if canonical(expected) == canonical(received) {
                    Vec::new()
                } else {
                    self.pair(describe(expected), describe(received), level)
                }
            }
        }
    }

    /// An `Expected`/`Received` pair, in that order.
    fn pair(&self, expected: String, received: String, level: usize) -> Vec<Line> {
        let labels = &self.options.labels;
        vec![
            Line::fixed(format!("{}: {expected}", labels.expected), level, vec![]),
            Line::fixed(format!("{}: {received}", labels.received), level, vec![]),
        ]
    }

    fn count_mismatch(
        &self,
        expected: &dyn Introspect,
        received: &dyn Introspect,
        expected_count: usize,
        received_count: usize,
        level: usize,
    ) -> Vec<Line> {
        trace!(expected_count, received_count, "count mismatch");
        let labels = &self.options.labels;
        let side = |label: &str, count: usize, value: &dyn Introspect| {
            let contents = if self.options.skip_value_on_count_mismatch {
                format!("{label}: ({count})")
            } else {
                format!("{label}: ({count}) {}", describe(value))
            };
            Line::fixed(contents, level + 1, vec![])
        };
        vec![Line::fixed(
            "Different count:",
            level,
            vec![
                side(&labels.received, received_count, received),
                side(&labels.expected, expected_count, expected),
            ],
        )]
    }

    fn map(&self, expected: &[Entry<'_>], received: &[Entry<'_>], level: usize) -> Vec<Line> {
        let expected = group_by_canonical(expected.iter().copied(), |(key, _)| key);
        let received = group_by_canonical(received.iter().copied(), |(key, _)| key);

        let mut lines = Vec::new();
        let mut missing = Vec::new();
        let mut extra = Vec::new();
        for (key, expected_entries) in &expected {
            let received_entries = received.get(key).map_or(&[][..], Vec::as_slice);
            match (expected_entries.as_slice(), received_entries) {
                ([(key_value, expected_value)], [(_, received_value)]) => {
                    let children = self.lines(*expected_value, *received_value, level + 1);
                    if !children.is_empty() {
                        lines.push(Line::orderable(
                            format!("Key {}:", describe(*key_value)),
                            level,
                            children,
                        ));
                    }
                }
                (expected_entries, received_entries) => {
                    // keys that render alike can only be told apart by their values
                    let expected_entries =
                        group_by_canonical(expected_entries.iter().copied(), |(_, value)| value);
                    let received_entries =
                        group_by_canonical(received_entries.iter().copied(), |(_, value)| value);
                    missing.extend(surplus(&expected_entries, &received_entries));
                    extra.extend(surplus(&received_entries, &expected_entries));
                }
            }
        }
        extra.extend(
            received
                .iter()
                .filter(|(key, _)| !expected.contains_key(*key))
                .flat_map(|(_, entries)| entries.iter().copied()),
        );

        let labels = &self.options.labels;
        if !missing.is_empty() {
            lines.push(Line::fixed(
                format!("{} key pairs:", labels.missing),
                level,
                missing
                    .into_iter()
                    .map(|(key, value)| entry_line(key, value, level + 1))
                    .collect(),
            ));
        }
        if !extra.is_empty() {
            lines.push(Line::fixed(
                format!("{} key pairs:", labels.extra),
                level,
                extra
                    .into_iter()
                    .map(|(key, value)| entry_line(key, value, level + 1))
                    .collect(),
            ));
        }
        lines
    }

    /// Multiset difference: elements rendering alike cancel out one for one.
    fn set(&self, expected: &[&dyn Introspect], received: &[&dyn Introspect], level: usize) -> Vec<Line> {
        let expected = group_by_canonical(expected.iter().copied(), |element| element);
        let received = group_by_canonical(received.iter().copied(), |element| element);
        let labels = &self.options.labels;

        let missing = surplus(&expected, &received)
            .map(|value| Line::orderable(format!("{}: {}", labels.missing, describe(value)), level, vec![]));
        let extra = surplus(&received, &expected)
            .map(|value| Line::orderable(format!("{}: {}", labels.extra, describe(value)), level, vec![]));
        missing.chain(extra).collect()
    }

    fn fields(&self, expected: &[Field<'_>], received: &[Field<'_>], level: usize) -> Vec<Line> {
        let labels = expected
            .iter()
            .enumerate()
            .map(|(index, field)| format!("{}:", field.label(index)));
        let pairs = expected
            .iter()
            .zip(received.iter())
            .map(|(e, r)| (e.value, r.value));
        self.children(labels.zip(pairs), level)
    }

    /// Element-wise comparison: every pair that recursion finds a difference in is
    /// wrapped under its label. An empty recursion means the pair is equal.
    fn children<'v>(
        &self,
        labelled: impl Iterator<Item = (String, Entry<'v>)>,
        level: usize,
    ) -> Vec<Line> {
        labelled
            .filter_map(|(label, (e, r))| {
                let nested = self.lines(e, r, level + 1);
                (!nested.is_empty()).then(|| Line::orderable(label, level, nested))
            })
            .collect()
    }
}

/// An expected/received pair of children, or a key/value entry of a map.
type Entry<'a> = (&'a dyn Introspect, &'a dyn Introspect);

/// Whether two field lists carry the same names in the same order.
fn same_layout(expected: &[Field<'_>], received: &[Field<'_>]) -> bool {
    expected.len() == received.len()
        && expected
            .iter()
            .zip(received)
            .all(|(e, r)| e.name == r.name)
}

/// The text a value is shown with in a leaf pair: unions only show their case.
fn leaf_text(shape: &Shape<'_>, value: &dyn Introspect) -> String {
    match shape {
        Shape::Union(union) => union.case.to_owned(),
        _ => describe(value),
    }
}

fn entry_line(key: &dyn Introspect, value: &dyn Introspect, level: usize) -> Line {
    Line::orderable(format!("{}: {}", describe(key), describe(value)), level, vec![])
}

/// Groups items by the canonical rendering of `value(item)`, keeping every item that
/// renders the same.
fn group_by_canonical<'a, T: Copy>(
    items: impl IntoIterator<Item = T>,
    value: impl Fn(T) -> &'a dyn Introspect,
) -> BTreeMap<String, Vec<T>> {
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(canonical(value(item))).or_default().push(item);
    }
    groups
}

/// The items of `side` left over once each is matched with one of `other` rendering
/// the same.
fn surplus<'m, T: Copy>(
    side: &'m BTreeMap<String, Vec<T>>,
    other: &'m BTreeMap<String, Vec<T>>,
) -> impl Iterator<Item = T> {
    side.iter().flat_map(move |(key, items)| {
        let matched = other.get(key).map_or(0, Vec::len);
        items.iter().skip(matched).copied()
    })
}

/// Computes the diff tree between two values.
///
/// This is the unrendered form of [`diff_with`], for callers presenting the result
/// their own way.
pub fn diff_tree<T: Introspect + ?Sized>(
    expected: &T,
    received: &T,
    options: &DiffOptions,
) -> Vec<Line> {
    let lines = Differ::new(options).lines(&expected, &received, 0);
    debug!(lines = lines.len(), "diff computed");
    lines
}

/// Describes where two values differ, with default options.
///
/// Returns an empty vector when there is no difference. See [`render`] for how lines
/// are grouped into strings.
///
/// ```
/// assert_eq!(shapediff_diff::diff(&2, &3), ["Expected: 2\nReceived: 3\n"]);
/// assert!(shapediff_diff::diff(&vec![1, 2], &vec![1, 2]).is_empty());
/// ```
pub fn diff<T: Introspect + ?Sized>(expected: &T, received: &T) -> Vec<String> {
    diff_with(expected, received, &DiffOptions::default())
}

/// Describes where two values differ.
pub fn diff_with<T: Introspect + ?Sized>(
    expected: &T,
    received: &T,
    options: &DiffOptions,
) -> Vec<String> {
    render(&diff_tree(expected, received, options), options)
}

/// Extension trait to diff any introspectable value against another of the same type.
pub trait IntrospectDiff: Introspect {
    /// Describes where `received` differs from `self`, with default options.
    fn diff(&self, received: &Self) -> Vec<String>;

    /// Describes where `received` differs from `self`.
    fn diff_with(&self, received: &Self, options: &DiffOptions) -> Vec<String>;
}

impl<T: Introspect + ?Sized> IntrospectDiff for T {
    fn diff(&self, received: &Self) -> Vec<String> {
        diff(self, received)
    }

    fn diff_with(&self, received: &Self, options: &DiffOptions) -> Vec<String> {
        diff_with(self, received, options)
    }
}
