use markdown_chunker::{chunk, Chunk, ChunkSlice, ChunkingConfig};

fn main() {
    println!("=== Multilingual Chunking Examples ===\n");

    let japanese = r#"
# はじめに

Rustは、安全性、速度、並行性を重視したシステムプログラミング言語です。

## メモリ安全性

Rustの所有権システムは、ガベージコレクタを必要とせずにメモリ安全性を保証します。
これにより、パフォーマンスが重要なシステムプログラミングに最適です。

## 並行性

Rustの型システムは、コンパイル時にデータ競合を防ぎ、並行プログラミングをより安全で信頼性の高いものにします。

```rust
fn main() {
    println!("こんにちは、世界！");
}
```

## パフォーマンス

Rustはゼロコスト抽象化を提供し、使用しない機能に対して料金を支払う必要はありません。
コンパイルされたコードは、同等のCまたはC++コードと同じ速度で実行されます。
"#;

    let chinese = r#"
# 介绍

Rust是一种系统编程语言，专注于安全性、速度和并发性。

## 内存安全

Rust的所有权系统确保内存安全，无需垃圾收集器。
这使其成为性能至关重要的系统编程的理想选择。

## 并发性

Rust的类型系统有助于在编译时防止数据竞争，使并发编程更安全、更可靠。

```rust
fn main() {
    println!("你好，世界！");
}
```

## 性能

Rust提供零成本抽象，这意味着您不需要为不使用的功能付费。
编译后的代码运行速度与等效的C或C++代码一样快。
"#;

    let korean = r#"
# 소개

Rust는 안전성, 속도 및 동시성에 중점을 둔 시스템 프로그래밍 언어입니다.

## 메모리 안전성

Rust의 소유권 시스템은 가비지 수집기 없이도 메모리 안전성을 보장합니다.
이는 성능이 중요한 시스템 프로그래밍에 이상적입니다.

```rust
fn main() {
    println!("안녕하세요, 세계!");
}
```
"#;

    let config = ChunkingConfig { size: 500, overlap: 50, encoding_model: "gpt-4".to_string() };

    println!("Japanese Document");
    println!("{}", "=".repeat(60));
    let ja_slices = vec![ChunkSlice::new("japanese", japanese)];
    let ja_chunks = chunk(&ja_slices, &config).unwrap();
    print_language_stats("Japanese", &ja_chunks);

    println!("\nChinese Document");
    println!("{}", "=".repeat(60));
    let zh_slices = vec![ChunkSlice::new("chinese", chinese)];
    let zh_chunks = chunk(&zh_slices, &config).unwrap();
    print_language_stats("Chinese", &zh_chunks);

    println!("\nKorean Document");
    println!("{}", "=".repeat(60));
    let ko_slices = vec![ChunkSlice::new("korean", korean)];
    let ko_chunks = chunk(&ko_slices, &config).unwrap();
    print_language_stats("Korean", &ko_chunks);

    println!("\nMixed Multilingual Document");
    println!("{}", "=".repeat(60));
    let mixed_slices = vec![
        ChunkSlice::new("japanese", japanese),
        ChunkSlice::new("chinese", chinese),
        ChunkSlice::new("korean", korean),
    ];
    let mixed_chunks = chunk(&mixed_slices, &config).unwrap();
    print_language_stats("Mixed", &mixed_chunks);

    println!("\n=== Detailed Japanese Chunks ===\n");
    for (i, c) in ja_chunks.iter().enumerate() {
        println!("Chunk #{}", i + 1);
        println!("  Tokens: {}", c.token_count);
        println!("  Characters: {}", c.text.chars().count());
        println!("  Sources: {:?}", c.document_ids.iter().collect::<Vec<_>>());

        if let Some(first_line) = c.text.lines().next() {
            println!("  Preview: {}", first_line);
        }

        println!();
    }
}

fn print_language_stats(language: &str, chunks: &[Chunk]) {
    let total_tokens: u32 = chunks.iter().map(|c| c.token_count).sum();
    let total_chars: usize = chunks.iter().map(|c| c.text.chars().count()).sum();
    let avg_tokens = if !chunks.is_empty() { total_tokens / chunks.len() as u32 } else { 0 };

    println!("Language: {}", language);
    println!("  Chunks: {}", chunks.len());
    println!("  Total tokens: {}", total_tokens);
    println!("  Total characters: {}", total_chars);
    println!("  Avg tokens/chunk: {}", avg_tokens);
    println!(
        "  Chars/token ratio: {:.2}",
        if total_tokens > 0 { total_chars as f64 / total_tokens as f64 } else { 0.0 }
    );
}
