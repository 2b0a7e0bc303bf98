use leptos::prelude::*;

/// A counter button action. `apply` is the whole state machine: the displayed
/// value is always the fold of the clicks so far over 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterOp {
    Increment,
    Decrement,
    Reset,
}

impl CounterOp {
    pub fn apply(self, value: i32) -> i32 {
        match self {
            CounterOp::Increment => value + 1,
            CounterOp::Decrement => value - 1,
            CounterOp::Reset => 0,
        }
    }
}

#[component]
pub fn ExamplesGallery() -> impl IntoView {
    view! {
        <section id="examples" class="examples">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Interactive examples"</h2>
                    <p class="section-description">
                        "Try live snippets and see how the three web technologies work together."
                    </p>
                </div>
                <div class="examples-grid">
                    <DemoCard title="HTML form" description="An interactive form with validation">
                        // No handler and no endpoint: default submission is an inert no-op
                        <form class="demo-form">
                            <input type="text" placeholder="Your name" class="demo-input" />
                            <input type="email" placeholder="Email" class="demo-input" />
                            <button type="submit" class="demo-submit">"Send"</button>
                        </form>
                    </DemoCard>
                    <DemoCard title="CSS animation" description="Smooth transitions and transforms">
                        <div class="demo-stage">
                            <div class="pulse-orb"></div>
                            <p class="demo-hint">"Hover over it"</p>
                        </div>
                    </DemoCard>
                    <DemoCard title="JavaScript counter" description="An interactive component">
                        <Counter />
                    </DemoCard>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DemoCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <article class="demo-card">
            <div class="demo-card-header">
                <h3 class="demo-card-title">{title}</h3>
                <p class="demo-card-description">{description}</p>
            </div>
            <div class="demo-card-body">{children()}</div>
        </article>
    }
}

/// Integer counter demo. State lives and dies with the card; nothing persists.
#[component]
fn Counter() -> impl IntoView {
    let (count, set_count) = signal(0);
    let step = move |op: CounterOp| move |_| set_count.update(|value| *value = op.apply(*value));

    view! {
        <div class="counter">
            <div class="counter-value">{move || count.get()}</div>
            <div class="counter-controls">
                <button class="counter-btn minus" on:click=step(CounterOp::Decrement)>
                    "-"
                </button>
                <button class="counter-btn reset" on:click=step(CounterOp::Reset)>
                    "Reset"
                </button>
                <button class="counter-btn plus" on:click=step(CounterOp::Increment)>
                    "+"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::CounterOp::{self, *};
    use pretty_assertions::assert_eq;

    #[test]
    fn click_sequence_yields_expected_displayed_values() {
        let ops = [Increment, Increment, Decrement, Reset, Decrement];
        let mut value = 0;
        let displayed: Vec<i32> = ops
            .iter()
            .map(|op| {
                value = op.apply(value);
                value
            })
            .collect();
        assert_eq!(displayed, vec![1, 2, 1, 0, -1]);
    }

    #[test]
    fn no_lower_bound() {
        assert_eq!(Decrement.apply(i32::MIN + 1), i32::MIN);
        assert_eq!(Decrement.apply(0), -1);
    }

    #[test]
    fn reset_returns_to_zero_from_anywhere() {
        for start in [-37, 0, 5, 1024] {
            assert_eq!(CounterOp::Reset.apply(start), 0);
        }
    }
}
