pub mod step_automaton;
