use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glossa_tokenizer::extract_tokens;

// A mixed-language source with every construct the tokenizer handles
const MIXED_SOURCE: &str = r#"#!/usr/bin/env python3
"""Module docstring
spanning lines."""
# line comment
import os.path

def render(items):
    out = []
    for i, item in enumerate(items):
        if i % 2 == 0 and item.get('visible', True):
            out.append("<li class=\"even\">%s</li>" % item['name'])
    return out

/* C block comment */
int main(int argc, char **argv) {
    printf("hello %d\n", argc << 2);
    return argc && argv ? 0 : 1;
}

<html>
  <!-- markup comment -->
  <body class="page" data-id=42>
    <p>Some text</p>
  </body>
</html>

{- Haskell block -}
main = putStrLn "done" -- trailing
(* OCaml block *)
let x = 0x1F + 3.14 in x
"#;

fn bench_extract_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_tokens");

    group.throughput(Throughput::Bytes(MIXED_SOURCE.len() as u64));
    group.bench_function("mixed_small", |b| {
        b.iter(|| black_box(extract_tokens(black_box(MIXED_SOURCE))));
    });

    let large = MIXED_SOURCE.repeat(64);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("mixed_large", |b| {
        b.iter(|| black_box(extract_tokens(black_box(&large))));
    });

    group.finish();
}

fn bench_unterminated(c: &mut Criterion) {
    let source = format!("start \"{}", "never closed ".repeat(512));
    c.bench_function("extract_tokens_unterminated_string", |b| {
        b.iter(|| black_box(extract_tokens(black_box(&source))));
    });
}

criterion_group!(benches, bench_extract_tokens, bench_unterminated);
criterion_main!(benches);
