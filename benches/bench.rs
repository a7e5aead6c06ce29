use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use std::collections::BTreeMap;

use llrb::map::Tree;

#[derive(Clone)]
enum MapEnum<K, V> {
    Llrb(Tree<K, V>),
    Std(BTreeMap<K, V>),
}

impl<K, V> MapEnum<K, V> {
    fn get(&self, k: &K) -> Option<&V>
    where
        K: Ord,
    {
        match self {
            Self::Llrb(t) => t.get(k),
            Self::Std(t) => t.get(k),
        }
    }

    fn insert(&mut self, k: K, v: V)
    where
        K: Ord,
    {
        match self {
            Self::Llrb(t) => {
                t.insert(k, v);
            }
            Self::Std(t) => {
                t.insert(k, v);
            }
        }
    }

    fn delete(&mut self, k: &K)
    where
        K: Ord,
    {
        match self {
            Self::Llrb(t) => {
                t.delete(k);
            }
            Self::Std(t) => {
                t.remove(k);
            }
        }
    }
}

/// Helper to bench a function on an ordered map.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of ordered maps before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut MapEnum<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;

        let llrb_map = {
            let mut tree = Tree::new();
            for x in 0..num_nodes {
                tree.insert(x as i32, x as i32);
            }

            tree
        };
        let std_map = (0..num_nodes).map(|x| (x as i32, x as i32)).collect();
        let map_tests = [
            ("llrb", MapEnum::Llrb(llrb_map)),
            ("btreemap", MapEnum::Std(std_map)),
        ];
        for (name, map) in map_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut map = black_box(map.clone());
                        let instant = std::time::Instant::now();
                        f(&mut map, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "get", |map, i| {
        let _value = black_box(map.get(&i));
    });
    bench_helper(c, "delete", |map, i| {
        map.delete(&i);
    });

    bench_helper(c, "insert", |map, i| {
        map.insert(i + 1, i + 1);
    });

    bench_helper(c, "get-miss", |map, i| {
        let _value = black_box(map.get(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |map, i| {
        map.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
