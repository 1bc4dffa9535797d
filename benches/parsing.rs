//! Benchmarks for IRC line parsing and formatting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ircwire::{format, Message, MessageRef};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with sender
const SENDER_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Message with tags
const TAGGED_MESSAGE: &str = "@time=2023-01-01T00:00:00.000Z;msgid=abc123;+example/tag=value :nick!user@host PRIVMSG #channel :Hello with tags!";

/// Lots of middle parameters separated by uneven space runs
const SPACED_MESSAGE: &str = ":irc.server.net 005 nick   CHANTYPES=#   EXCEPTS   INVEX   CHANMODES=eIbq,k,flj,CFLMPQScgimnprstz   CHANLIMIT=#:120 :are supported by this server";

/// Numeric response
const NUMERIC_RESPONSE: &str = ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, line) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_sender", SENDER_MESSAGE),
        ("with_tags", TAGGED_MESSAGE),
        ("space_runs", SPACED_MESSAGE),
        ("numeric_response", NUMERIC_RESPONSE),
    ] {
        group.bench_with_input(BenchmarkId::new("owned", name), line, |b, s| {
            b.iter(|| {
                let msg = Message::parse(black_box(s)).unwrap();
                black_box(msg)
            })
        });

        group.bench_with_input(BenchmarkId::new("borrowed", name), line, |b, s| {
            b.iter(|| {
                let msg = MessageRef::parse(black_box(s)).unwrap();
                black_box(msg.params().len())
            })
        });
    }

    group.bench_function("invalid_blank", |b| {
        b.iter(|| black_box(Message::parse(black_box("      ")).is_err()))
    });

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Outbound Formatting");

    group.bench_function("identity", |b| {
        b.iter(|| black_box(format::identity(black_box("example_bot"))))
    });

    group.bench_function("send_message", |b| {
        b.iter(|| {
            black_box(format::send_message(
                black_box("#channel"),
                black_box("Hello, world!"),
            ))
        })
    });

    group.bench_function("keepalive_reply", |b| {
        b.iter(|| black_box(format::keepalive_reply(black_box("irc.example.com"))))
    });

    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Round Trip");

    for (name, line) in [
        ("simple", SIMPLE_MESSAGE),
        ("sender", SENDER_MESSAGE),
        ("tagged", TAGGED_MESSAGE),
    ] {
        group.bench_with_input(BenchmarkId::new("parse_serialize", name), line, |b, s| {
            b.iter(|| {
                let msg = Message::parse(black_box(s)).unwrap();
                black_box(msg.to_string())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_formatting,
    benchmark_round_trip,
);

criterion_main!(benches);
