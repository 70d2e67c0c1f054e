use raxmap::RadixTreeMap;

fn main() {
    let mut map = RadixTreeMap::<String, u32>::default();
    map.insert("romane", 1);
    map.insert("romanus", 2);
    map.insert("romulus", 3);
    map.insert("rubens", 4);
    map.insert("ruber", 5);
    map.insert("rubicon", 6);
    map.insert("rubicundus", 7);
    println!("{map:?}");
}
