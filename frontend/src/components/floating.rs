use yew::prelude::*;

struct Orb {
    top: f32,
    left: f32,
    size: u32,
    delay: f32,
    duration: f32,
}

/// Lays out `count` orbs deterministically across the page. A small LCG
/// keeps positions stable between renders.
fn orbs(count: usize) -> Vec<Orb> {
    let mut seed: u32 = 0x9e37_79b9;
    let mut next = move || {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (seed >> 8) as f32 / (1u32 << 24) as f32
    };
    (0..count)
        .map(|_| Orb {
            top: next() * 100.0,
            left: next() * 100.0,
            size: 4 + (next() * 10.0) as u32,
            delay: next() * 5.0,
            duration: 6.0 + next() * 8.0,
        })
        .collect()
}

#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    let orbs = use_memo(|_| orbs(18), ());

    html! {
        <div class="floating-elements" aria-hidden="true">
            <style>
                {r#"
                    .floating-elements {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                        overflow: hidden;
                    }
                    .floating-orb {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(34, 211, 238, 0.35);
                        box-shadow: 0 0 12px rgba(34, 211, 238, 0.6);
                        animation-name: drift;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0); opacity: 0.3; }
                        50% { transform: translate(20px, -30px); opacity: 0.8; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .floating-orb {
                            animation: none;
                        }
                    }
                "#}
            </style>
            { for orbs.iter().map(|orb| html! {
                <span
                    class="floating-orb"
                    style={format!(
                        "top: {:.1}%; left: {:.1}%; width: {}px; height: {}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        orb.top, orb.left, orb.size, orb.size, orb.delay, orb.duration
                    )}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbs_stay_on_page() {
        for orb in orbs(50) {
            assert!((0.0..100.0).contains(&orb.top));
            assert!((0.0..100.0).contains(&orb.left));
            assert!((4..14).contains(&orb.size));
        }
    }
}
