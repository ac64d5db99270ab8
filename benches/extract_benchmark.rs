//! Benchmarks for finrev extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the offline pipeline over synthetic responses.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finrev::model::{AnalysisResponse, Block, BlockIndex, BlockType};
use finrev::{extract_from_response, ExtractOptions};

/// Creates a response with `page_count` pages, each holding a heading line
/// and one table; the statement heading is on the last page.
fn create_test_response(page_count: u32, rows: u32) -> AnalysisResponse {
    let mut blocks = Vec::new();
    let mut next = 0usize;
    let mut id = |prefix: &str| {
        next += 1;
        format!("{}-{}", prefix, next)
    };

    for page in 1..=page_count {
        let heading = if page == page_count {
            "STATEMENT OF PROFIT OR LOSS"
        } else {
            "Notes to the financial statements"
        };
        let word = id("word");
        blocks.push(Block::word(word.clone(), heading).on_page(page));
        blocks.push(
            Block::new(id("line"), BlockType::Line)
                .on_page(page)
                .with_children([word]),
        );

        let mut cells = Vec::new();
        for row in 1..=rows {
            for column in 1..=4 {
                let text = match (row, column) {
                    (1, 1) => "Line Item".to_string(),
                    (1, c) => format!("{}", 2022 + c),
                    (r, 1) if r == rows => "Revenue".to_string(),
                    (r, 1) => format!("Expense {}", r),
                    (r, c) => format!("{},{:03}", r, c),
                };
                let word = id("word");
                let cell = id("cell");
                blocks.push(Block::word(word.clone(), text).on_page(page));
                blocks.push(Block::cell(cell.clone(), row, column).on_page(page).with_children([word]));
                cells.push(cell);
            }
        }
        blocks.push(
            Block::new(id("table"), BlockType::Table)
                .on_page(page)
                .with_children(cells),
        );
    }

    AnalysisResponse::from_blocks(blocks)
}

/// Benchmark block indexing.
fn bench_block_index(c: &mut Criterion) {
    let response = create_test_response(10, 40);

    c.bench_function("block_index_10_pages", |b| {
        b.iter(|| BlockIndex::new(black_box(&response.blocks)).len());
    });
}

/// Benchmark the full offline pipeline at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let options = ExtractOptions::new().with_target_year("2024");

    for page_count in [1, 10, 50].iter() {
        let response = create_test_response(*page_count, 40);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| extract_from_response(black_box(&response), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_block_index, bench_extraction);
criterion_main!(benches);
