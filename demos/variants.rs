use randpick::{PickError, Pickable};
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, Pickable)]
enum Layout {
    #[weight(6)]
    Classic,
    #[weight(3)]
    Compact,
    #[weight(1)]
    Experimental,
}

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, Pickable)]
enum Theme {
    #[percentage(50)]
    Light,
    #[percentage(50)]
    Dark,
}

fn main() -> Result<(), PickError> {
    let mut rng = rand::rng();
    let mut hist: HashMap<(Layout, Theme), u64> = HashMap::default();

    let layouts = Layout::entries()?;
    let themes = Theme::entries()?;
    for _ in 0..100_000 {
        let key = (layouts.pick_one(&mut rng)?, themes.pick_one(&mut rng)?);
        *hist.entry(key).or_default() += 1;
    }

    let mut v: Vec<_> = hist.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1));
    for ((layout, theme), c) in v {
        println!("{c:>6} {layout:?} / {theme:?}");
    }

    // A shortlist of two layouts to offer side by side.
    println!("\nshortlist: {:?}", Layout::pick_distinct(2, &mut rng)?);

    Ok(())
}
