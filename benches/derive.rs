// benches/derive.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resdesk::table::{Cell, ColumnDescriptor, FilterGroup, Record, RowKey, Tone, TabularView, Value};

struct Row {
    id: u64,
    name: String,
    qty: i64,
    open: bool,
}

impl Record for Row {
    fn key(&self) -> RowKey { self.id }
    fn field(&self, name: &str) -> Value {
        match name {
            "name" => Value::text(self.name.as_str()),
            "qty" => Value::Int(self.qty),
            _ => Value::Empty,
        }
    }
}

fn sample(n: u64) -> Vec<Row> {
    const NAMES: &[&str] = &["Écran", "ordinateur", "Imprimante", "vidéoprojecteur", "Switch"];
    (0..n)
        .map(|i| Row {
            id: i,
            name: format!("{} {}", NAMES[(i % 5) as usize], i % 97),
            qty: ((i * 7919) % 101) as i64,
            open: i % 3 != 0,
        })
        .collect()
}

fn view(n: u64) -> TabularView<Row> {
    TabularView::new(sample(n))
        .column(ColumnDescriptor::field("Name", "name").sortable())
        .column(ColumnDescriptor::field("Qty", "qty").sortable())
        .column(
            ColumnDescriptor::derived("State", |r: &Row| {
                if r.open { Cell::badge("Open", Tone::Info) } else { Cell::badge("Closed", Tone::Neutral) }
            })
            .sortable(),
        )
        .filter(FilterGroup::new("State").option("Open", "open", |r: &Row| r.open))
        .search_by(|r: &Row| r.name.clone())
}

fn bench_derive(c: &mut Criterion) {
    let mut v = view(10_000);

    c.bench_function("visible_unsorted", |b| b.iter(|| black_box(v.visible().len())));

    v.toggle_sort(0);
    c.bench_function("visible_sorted_text", |b| b.iter(|| black_box(v.visible().len())));

    v.toggle_sort(1);
    v.set_active_filter_option("State", "open");
    v.set_search_text("ordi");
    c.bench_function("visible_filtered_sorted_int", |b| b.iter(|| black_box(v.visible().len())));

    c.bench_function("snapshot", |b| b.iter(|| black_box(v.snapshot().total)));
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
