// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use court_scrape::core::html::text_nodes;
use court_scrape::specs::club_page::{ExtractOptions, extract};

/// A club page with `courts` cards plus the usual chrome around them.
fn synthetic_page(courts: usize) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><style>.card{}</style><script>var x = '<div>';</script></head><body>\
         <nav><a href=\"/\">Home</a> &middot; <a href=\"/clubs\">Clubs</a></nav><main>",
    );
    for i in 0..courts {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{n} &bull; Court {n}</h3>\
             <div class=\"body\"><span>2 options &bull; Starting at {a}:00 until {a}:30, \
             Starting at {b}:15 until {b}:45</span></div></div>",
            n = i + 1,
            a = 8 + i % 6,
            b = 15 + i % 6,
        ));
    }
    html.push_str("</main><footer>© club</footer></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(200);
    let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap_or_default();
    let forward = ExtractOptions::default();
    let scoped = ExtractOptions::scoped();

    c.bench_function("text_nodes", |b| {
        b.iter(|| black_box(text_nodes(black_box(&page)).len()))
    });

    c.bench_function("extract_forward", |b| {
        b.iter(|| {
            let slots = extract(black_box(&page), "Club A", "Hamburg", today, &forward);
            black_box(slots.len())
        })
    });

    c.bench_function("extract_scoped", |b| {
        b.iter(|| {
            let slots = extract(black_box(&page), "Club A", "Hamburg", today, &scoped);
            black_box(slots.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
