/// Integration test target exercising the full journal flow
mod journal_flow;
